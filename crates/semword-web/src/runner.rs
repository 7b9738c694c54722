use rand::rngs::StdRng;
use rand::SeedableRng;
use semword_engine::{
    AssetManifest, Difficulty, Ranking, ScoredWord, SemwordError, Session, StartReply,
    SubmitReply, Vocabulary, WordGame, WordList,
};

/// A session together with the ranking of its target.
struct Round {
    session: Session,
    ranking: Ranking,
}

/// Owns the loaded game and the live round of one page.
///
/// The page creates one `thread_local!` GameRunner and talks to it through the
/// free functions exported from `lib.rs`, because wasm-bindgen cannot export
/// the engine's types directly.
pub struct GameRunner {
    game: WordGame,
    manifest: AssetManifest,
    rng: StdRng,
    round: Option<Round>,
}

impl GameRunner {
    pub fn new(game: WordGame, manifest: AssetManifest, seed: u64) -> Self {
        Self {
            game,
            manifest,
            rng: StdRng::seed_from_u64(seed),
            round: None,
        }
    }

    /// Decode a word2vec model and build the game with the manifest's tuning.
    pub fn from_model_bytes(
        model: &[u8],
        manifest: AssetManifest,
        seed: u64,
    ) -> Result<Self, SemwordError> {
        let vocabulary = Vocabulary::from_word2vec_bytes(model)?;
        let game = WordGame::from_vocabulary(vocabulary, manifest.game.clone());
        Ok(Self::new(game, manifest, seed))
    }

    /// Word list path the page should fetch for a difficulty code.
    pub fn word_list_path(&self, mode: &str) -> Result<Option<String>, SemwordError> {
        let mode: Difficulty = mode.parse()?;
        Ok(self.manifest.word_list_path(mode).map(str::to_owned))
    }

    /// Start a new round, replacing any previous one.
    pub fn start(&mut self, mode: &str, word_list: &str) -> Result<StartReply, SemwordError> {
        let mode: Difficulty = mode.parse()?;
        let words = WordList::parse(word_list);
        let (session, ranking) = self.game.start(mode, &words, &mut self.rng)?;
        let reply = StartReply::new(&session);
        self.round = Some(Round { session, ranking });
        Ok(reply)
    }

    /// Apply one submission to the live round.
    pub fn submit(&mut self, raw: &str) -> Result<SubmitReply, SemwordError> {
        let round = self.round.as_mut().ok_or(SemwordError::NoSession)?;
        let outcome = self.game.submit(&mut round.session, &round.ranking, raw)?;
        Ok(SubmitReply::new(&self.game, &round.session, outcome))
    }

    pub fn session(&self) -> Option<&Session> {
        self.round.as_ref().map(|round| &round.session)
    }

    /// JSON snapshot of the live session, for the page to keep.
    pub fn session_json(&self) -> Result<Option<String>, SemwordError> {
        self.session().map(Session::to_json).transpose()
    }

    /// Resume a session from a snapshot. The ranking is recomputed.
    pub fn restore(&mut self, json: &str) -> Result<(), SemwordError> {
        let session = Session::from_json(json)?;
        let ranking = self.game.ranking(&session.target_word)?;
        log::info!(
            "session restored: {} guesses, {} jokers left",
            session.guesses.len(),
            session.jokers
        );
        self.round = Some(Round { session, ranking });
        Ok(())
    }

    /// Guess history of the live session, best first.
    pub fn history(&self) -> Result<Vec<ScoredWord>, SemwordError> {
        self.session()
            .map(Session::history)
            .ok_or(SemwordError::NoSession)
    }
}
