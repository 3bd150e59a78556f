use log::info;

use crate::source::Line;

mod consts {
    pub const CLASS: &str = "class:";
    pub const TRIGGER: &str = "trigger ";
    pub const ELEVATOR: &str = "elevator ";
    pub const STOP: &str = "stop:";
}

/// Running totals over an `.inf` file.
///
/// Stops are counted for the whole file, not per elevator.
#[derive(Clone, Copy, Default, PartialEq, Eq, Debug)]
pub struct ScriptSummary {
    pub class_count: usize,
    pub elevator_count: usize,
    pub trigger_count: usize,
    pub stop_count: usize,
}

impl ScriptSummary {
    /// Keywords are matched anywhere in the lowercased line.
    pub fn parse(lines: &[Line<'_>]) -> Self {
        let mut summary = Self::default();

        for line in lines {
            summary.apply(&line.text.to_ascii_lowercase());
        }

        info!("INF: {} entries", summary.class_count);

        summary
    }

    fn apply(&mut self, line: &str) {
        if line.contains(consts::CLASS) {
            self.class_count += 1;

            if line.contains(consts::TRIGGER) {
                self.trigger_count += 1;
            } else if line.contains(consts::ELEVATOR) {
                self.elevator_count += 1;
            }
        }

        if line.contains(consts::STOP) {
            self.stop_count += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::source;

    fn parse(text: &str) -> ScriptSummary {
        ScriptSummary::parse(&source::lines(text))
    }

    #[test]
    fn counts_classes_and_stops() {
        let summary = parse(
            "class: trigger x\n\
             class: trigger x\n\
             class: elevator y\n\
             stop: 0 hold\n\
             stop: 10 hold\n\
             stop: 20 terminate",
        );

        assert_eq!(
            summary,
            ScriptSummary {
                class_count: 3,
                elevator_count: 1,
                trigger_count: 2,
                stop_count: 3,
            }
        );
    }

    #[test]
    fn real_inf_layout() {
        let summary = parse(
            "INF 1.0
LEVELNAME SECBASE
items 3
item: sector name: lift1
  seq
    CLASS: ELEVATOR MOVE_FLOOR
    SPEED: 20
    STOP: -8 HOLD
    STOP: 0 HOLD
  seqend
item: line name: door num: 2
  seq
    CLASS: TRIGGER STANDARD
    CLIENT: lift1
  seqend
item: level
  seq
    class: elevator change_light
    Stop: 0 5
  seqend",
        );

        assert_eq!(
            summary,
            ScriptSummary {
                class_count: 3,
                elevator_count: 2,
                trigger_count: 1,
                stop_count: 3,
            }
        );
    }

    #[test]
    fn trigger_wins_over_elevator() {
        let summary = parse("class: trigger elevator ");

        assert_eq!(summary.trigger_count, 1);
        assert_eq!(summary.elevator_count, 0);
    }

    #[test]
    fn keyword_needs_trailing_space() {
        // Only the `class:` count moves: `trigger` ends the line
        let summary = parse("class: trigger");

        assert_eq!(summary.class_count, 1);
        assert_eq!(summary.trigger_count, 0);
    }

    #[test]
    fn stops_outside_classes_still_count() {
        let summary = parse("stop: 1\nclass: elevator move_ceiling stop: 2");

        assert_eq!(summary.class_count, 1);
        assert_eq!(summary.elevator_count, 1);
        assert_eq!(summary.stop_count, 2);
    }
}
