use std::collections::BTreeMap;

/// Student answers keyed by 0-based question index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSheet {
    answers: BTreeMap<usize, String>,
}

impl AnswerSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse typed answers in `Q1. answer` form, one per line.
    ///
    /// Lines that do not start with `Q`, have no `.`, or carry an
    /// unparseable or zero question number are ignored. A later line for
    /// the same question replaces the earlier one.
    pub fn parse_typed(input: &str) -> Self {
        let mut sheet = Self::new();

        for line in input.lines() {
            let line = line.trim();
            if !line.starts_with('Q') {
                continue;
            }
            let Some((label, answer)) = line.split_once('.') else {
                continue;
            };
            let Ok(number) = label.trim_start_matches('Q').trim().parse::<usize>() else {
                continue;
            };
            let Some(index) = number.checked_sub(1) else {
                continue;
            };
            sheet.answers.insert(index, answer.trim().to_string());
        }

        sheet
    }

    /// Answer for a 0-based question index, if one was given and is non-blank
    pub fn get(&self, index: usize) -> Option<&str> {
        self.answers
            .get(&index)
            .map(|a| a.as_str())
            .filter(|a| !a.trim().is_empty())
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typed() {
        let sheet = AnswerSheet::parse_typed("Q1. 35\nQ2. -15\nQ10. The answer is 7.5 metres");
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet.get(0), Some("35"));
        assert_eq!(sheet.get(1), Some("-15"));
        assert_eq!(sheet.get(9), Some("The answer is 7.5 metres"));
    }

    #[test]
    fn test_parse_skips_noise() {
        let input = "My answers\nQ. nothing\nQx. bad\nQ0. zero\nq1. lower\n  Q3 . spaced";
        let sheet = AnswerSheet::parse_typed(input);
        assert_eq!(sheet.len(), 1);
        assert_eq!(sheet.get(2), Some("spaced"));
    }

    #[test]
    fn test_blank_answer_counts_as_missing() {
        let sheet = AnswerSheet::parse_typed("Q1.\nQ2.   ");
        assert_eq!(sheet.len(), 2);
        assert_eq!(sheet.get(0), None);
        assert_eq!(sheet.get(1), None);
    }

    #[test]
    fn test_later_line_wins() {
        let sheet = AnswerSheet::parse_typed("Q1. first\nQ1. second");
        assert_eq!(sheet.get(0), Some("second"));
    }
}
