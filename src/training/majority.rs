//! Majority class and proportion within a record set.

use crate::data::Label;

use super::entropy::ClassCounts;

/// Dominant class label in a record set and its share of that set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Majority {
    pub label: Label,
    /// Fraction of records carrying `label`, in `[0.5, 1.0]`.
    pub proportion: f64,
}

/// Determine the majority label of a non-empty record set.
///
/// The label with the strictly higher count wins. Ties break in favor of
/// [`Label::Pos`] (fixed rule; the reported proportion is then exactly
/// 0.5). Returns `None` for an empty input - callers must guard before
/// interpreting the result.
pub fn majority_vote(labels: impl IntoIterator<Item = Label>) -> Option<Majority> {
    let counts = ClassCounts::from_labels(labels);
    let total = counts.total();
    if total == 0 {
        return None;
    }

    // Pos wins ties.
    let label = if counts.neg > counts.pos {
        Label::Neg
    } else {
        Label::Pos
    };

    Some(Majority {
        label,
        proportion: f64::from(counts.count(label)) / f64::from(total),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn empty_input_yields_none() {
        assert_eq!(majority_vote([]), None);
    }

    #[test]
    fn strict_majority_wins() {
        let majority = majority_vote([Label::Neg, Label::Neg, Label::Pos]).unwrap();
        assert_eq!(majority.label, Label::Neg);
        assert_relative_eq!(majority.proportion, 2.0 / 3.0, max_relative = 1e-12);
    }

    #[test]
    fn tie_favors_pos() {
        let majority = majority_vote([Label::Neg, Label::Pos]).unwrap();
        assert_eq!(majority.label, Label::Pos);
        assert_relative_eq!(majority.proportion, 0.5, max_relative = 1e-12);
    }

    #[test]
    fn proportion_equals_winning_count_over_total() {
        let labels = vec![
            Label::Pos,
            Label::Pos,
            Label::Pos,
            Label::Pos,
            Label::Pos,
            Label::Pos,
            Label::Pos,
            Label::Pos,
            Label::Neg,
        ];
        let majority = majority_vote(labels.iter().copied()).unwrap();
        assert_eq!(majority.label, Label::Pos);
        assert_relative_eq!(majority.proportion, 8.0 / 9.0, max_relative = 1e-12);
        assert!(majority.proportion > 0.5 && majority.proportion <= 1.0);
    }

    #[test]
    fn unanimous_set_reports_full_proportion() {
        let majority = majority_vote([Label::Neg; 4]).unwrap();
        assert_eq!(majority.label, Label::Neg);
        assert_relative_eq!(majority.proportion, 1.0, max_relative = 1e-12);
    }
}
