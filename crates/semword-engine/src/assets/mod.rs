//! Asset manifest and word lists.
//!
//! Native hosts read everything from disk through [`WordGame::open`](crate::WordGame::open);
//! the browser bridge fetches the files itself and passes their contents in.

pub mod manifest;
pub mod registry;
pub mod word_list;
