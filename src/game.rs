use crate::dictionary::DictionaryOracle;
use crate::round::RoundState;
use crate::validator::{Rejection, Verdict, validate};
use log::{debug, info};

/// One player command, as decoded by the host interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    Submit(String),
    NewRound,
    Exit,
}

/// Host seam: every front end (line-oriented CLI, ratatui TUI, test
/// harness) drives the same loop through this trait.
pub trait GameInterface {
    /// Shown at every round start: root word, empty list, zero score.
    fn display_round(&mut self, state: &RoundState);

    /// Returns the next action, or None if the input was not actionable
    /// yet (the loop just asks again).
    fn read_action(&mut self) -> Option<UserAction>;

    /// Shown after a submission was accepted and recorded.
    fn display_accepted(&mut self, state: &RoundState);

    /// Shown as a dismissible title+message acknowledgment.
    fn display_rejection(&mut self, rejection: Rejection, root_word: &str);

    fn display_exit_message(&mut self);
}

/// Runs rounds until the player exits. One action is fully processed
/// before the next is read; rejections never end the round.
pub fn game_loop<I: GameInterface>(
    word_list: &[String],
    dictionary: &dyn DictionaryOracle,
    interface: &mut I,
) {
    let mut rng = rand::rng();
    let mut state = RoundState::start(word_list, &mut rng);
    interface.display_round(&state);

    loop {
        let Some(action) = interface.read_action() else {
            continue;
        };
        match action {
            UserAction::Exit => {
                info!("player exited with score {}", state.score());
                interface.display_exit_message();
                break;
            }
            UserAction::NewRound => {
                state = RoundState::start(word_list, &mut rng);
                interface.display_round(&state);
            }
            UserAction::Submit(answer) => match validate(&answer, &state, dictionary) {
                Verdict::Accepted => {
                    state.accept(&answer);
                    debug!("accepted '{}', score {}", answer.to_lowercase(), state.score());
                    interface.display_accepted(&state);
                }
                Verdict::Rejected(rejection) => {
                    debug!("rejected '{answer}': {}", rejection.title());
                    interface.display_rejection(rejection, state.root_word());
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::SetDictionary;

    /// Scripted interface: plays back a fixed action list and records what
    /// the loop displayed.
    struct ScriptedInterface {
        actions: Vec<UserAction>,
        events: Vec<String>,
    }

    impl ScriptedInterface {
        fn new(actions: &[UserAction]) -> Self {
            Self {
                actions: actions.to_vec(),
                events: Vec::new(),
            }
        }
    }

    impl GameInterface for ScriptedInterface {
        fn display_round(&mut self, state: &RoundState) {
            self.events.push(format!("round:{}", state.root_word()));
        }

        fn read_action(&mut self) -> Option<UserAction> {
            if self.actions.is_empty() {
                Some(UserAction::Exit)
            } else {
                Some(self.actions.remove(0))
            }
        }

        fn display_accepted(&mut self, state: &RoundState) {
            self.events.push(format!(
                "accepted:{}:score={}",
                state.used_words()[0],
                state.score()
            ));
        }

        fn display_rejection(&mut self, rejection: Rejection, _root_word: &str) {
            self.events.push(format!("rejected:{:?}", rejection));
        }

        fn display_exit_message(&mut self) {
            self.events.push("exit".to_string());
        }
    }

    fn dict() -> SetDictionary {
        SetDictionary::from_text("silk\nworm\nilk\n")
    }

    fn run(actions: &[UserAction]) -> Vec<String> {
        let word_list = vec!["silkworm".to_string()];
        let mut interface = ScriptedInterface::new(actions);
        game_loop(&word_list, &dict(), &mut interface);
        interface.events
    }

    #[test]
    fn accepts_and_scores_valid_submissions() {
        let events = run(&[
            UserAction::Submit("silk".to_string()),
            UserAction::Submit("worm".to_string()),
            UserAction::Exit,
        ]);
        assert_eq!(
            events,
            [
                "round:silkworm",
                "accepted:silk:score=1",
                "accepted:worm:score=2",
                "exit",
            ]
        );
    }

    #[test]
    fn duplicate_submission_is_rejected_second_time() {
        let events = run(&[
            UserAction::Submit("silk".to_string()),
            UserAction::Submit("silk".to_string()),
            UserAction::Exit,
        ]);
        assert_eq!(
            events,
            [
                "round:silkworm",
                "accepted:silk:score=1",
                "rejected:NotOriginal",
                "exit",
            ]
        );
    }

    #[test]
    fn rejection_does_not_end_the_round() {
        let events = run(&[
            UserAction::Submit("zzz".to_string()),
            UserAction::Submit("silk".to_string()),
            UserAction::Exit,
        ]);
        assert_eq!(
            events,
            [
                "round:silkworm",
                "rejected:NotPossible",
                "accepted:silk:score=1",
                "exit",
            ]
        );
    }

    #[test]
    fn new_round_resets_state() {
        let events = run(&[
            UserAction::Submit("silk".to_string()),
            UserAction::NewRound,
            UserAction::Submit("silk".to_string()),
            UserAction::Exit,
        ]);
        assert_eq!(
            events,
            [
                "round:silkworm",
                "accepted:silk:score=1",
                "round:silkworm",
                "accepted:silk:score=1",
                "exit",
            ]
        );
    }

    #[test]
    fn empty_submission_is_rejected_as_empty() {
        let events = run(&[UserAction::Submit(String::new()), UserAction::Exit]);
        assert_eq!(
            events,
            ["round:silkworm", "rejected:Empty", "exit"]
        );
    }
}
