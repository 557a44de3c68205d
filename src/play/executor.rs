use crate::Score;
use crate::agents::Agent;
use crate::game::Action;
use crate::game::Nature;
use crate::game::View;

/// Executor runs one game to the end: the agent decides, the table
/// resolves the decision against the real hands, and every resolved
/// action is kept for replay and display.
#[derive(Debug)]
pub struct Executor {
    nature: Nature,
    agent: Box<dyn Agent>,
    actions: Vec<Action>,
}

impl Executor {
    pub fn new(nature: Nature, agent: Box<dyn Agent>) -> Self {
        Self {
            nature,
            agent,
            actions: Vec::new(),
        }
    }

    pub fn nature(&self) -> &Nature {
        &self.nature
    }
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
    /// the latest action as the player now to act saw it
    pub fn perspective(&self) -> Option<Action> {
        let view = View::from((self.nature.state(), self.nature.current()));
        self.actions.last().map(|action| view.localize(action))
    }

    /// play until the game is over and return the final score.
    /// the turn does not advance past the last action.
    pub fn play(&mut self, interactive: bool) -> Score {
        loop {
            if interactive {
                self.pause();
            }
            let decision = self.agent.act(&self.nature);
            let action = self.nature.resolve(decision);
            log::trace!("{}", action);
            self.actions.push(action);
            self.nature.update(&action);
            if self.nature.is_over() {
                break;
            }
            self.agent.inform(&action);
            self.nature.advance_turn();
        }
        let score = self.nature.score();
        log::debug!(
            "seed {} scored {} in {} actions",
            self.nature.seed(),
            score,
            self.actions.len()
        );
        score
    }

    #[cfg(feature = "cli")]
    fn pause(&self) {
        println!("{}", self.nature);
        if let Some(action) = self.perspective() {
            println!("{}", action);
        }
        let prompt = dialoguer::Input::<String>::new()
            .with_prompt("enter to continue")
            .allow_empty(true)
            .report(false)
            .interact_text();
        if let Err(e) = prompt {
            log::warn!("no terminal to pause on: {}", e);
        }
    }

    #[cfg(not(feature = "cli"))]
    fn pause(&self) {}
}
