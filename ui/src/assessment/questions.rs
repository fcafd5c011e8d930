//! Fixed question table (two questions per category).

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub category: &'static str,
}

pub const QUESTIONS: [Question; 10] = [
    Question {
        id: 1,
        text: "How would you rate your overall mood over the past two weeks?",
        category: "emotional",
    },
    Question {
        id: 2,
        text: "How well have you been able to manage difficult emotions?",
        category: "emotional",
    },
    Question {
        id: 3,
        text: "How would you rate the quality of your sleep?",
        category: "sleep",
    },
    Question {
        id: 4,
        text: "How rested do you feel when you wake up?",
        category: "sleep",
    },
    Question {
        id: 5,
        text: "How well are you coping with stress at work or school?",
        category: "stress",
    },
    Question {
        id: 6,
        text: "How often do you feel calm and in control?",
        category: "stress",
    },
    Question {
        id: 7,
        text: "How connected do you feel to friends and family?",
        category: "social",
    },
    Question {
        id: 8,
        text: "How satisfied are you with your social activities?",
        category: "social",
    },
    Question {
        id: 9,
        text: "How would you rate your daily energy levels?",
        category: "energy",
    },
    Question {
        id: 10,
        text: "How motivated do you feel to take on daily tasks?",
        category: "energy",
    },
];

pub fn find_question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_one_through_ten() {
        let ids: Vec<u32> = QUESTIONS.iter().map(|q| q.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn lookup_misses_unknown_ids() {
        assert_eq!(find_question(3).map(|q| q.category), Some("sleep"));
        assert!(find_question(0).is_none());
        assert!(find_question(11).is_none());
    }
}
