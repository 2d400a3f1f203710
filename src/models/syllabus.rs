use std::fmt;
use std::str::FromStr;

/// Class level the questions are pitched at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    Primary6,
    Primary7,
}

impl Grade {
    pub const ALL: &'static [Grade] = &[Grade::Primary6, Grade::Primary7];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Primary6 => "Primary 6",
            Self::Primary7 => "Primary 7",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "p6" | "6" | "primary6" => Ok(Self::Primary6),
            "p7" | "7" | "primary7" => Ok(Self::Primary7),
            _ => Err(format!("unknown grade '{}' (expected p6 or p7)", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Mathematics,
    English,
    SocialStudies,
    Science,
}

impl Subject {
    pub const ALL: &'static [Subject] = &[
        Subject::Mathematics,
        Subject::English,
        Subject::SocialStudies,
        Subject::Science,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Mathematics => "Mathematics",
            Self::English => "English",
            Self::SocialStudies => "Social Studies",
            Self::Science => "Science",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Subject {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .to_lowercase()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect();
        match key.as_str() {
            "math" | "maths" | "mathematics" => Ok(Self::Mathematics),
            "english" => Ok(Self::English),
            "sst" | "social" | "socialstudies" => Ok(Self::SocialStudies),
            "science" => Ok(Self::Science),
            _ => Err(format!(
                "unknown subject '{}' (expected mathematics, english, social-studies or science)",
                s
            )),
        }
    }
}

/// Curriculum topics for a grade and subject
pub fn topics(grade: Grade, subject: Subject) -> &'static [&'static str] {
    match (grade, subject) {
        (Grade::Primary6, Subject::Mathematics) => &[
            "Whole Numbers - Addition & Subtraction",
            "Whole Numbers - Multiplication & Division",
            "Factors, Multiples and Prime Numbers",
            "Fractions & Decimals",
            "Money & Making Change",
            "Measurement - Length, Mass & Capacity",
            "Time - Hours, Minutes & Conversion",
            "Geometry - Shapes, Symmetry & Angles (basic)",
            "Data Handling - Tables, Bar Graphs & Pictograms",
            "Ratio & Proportion",
            "Introduction to Algebra - Simple Equations",
            "Basic Percentages and Problem Solving",
        ],
        (Grade::Primary6, Subject::English) => &[
            "Reading Comprehension - Short Passages",
            "Grammar - Tenses, Parts of Speech, Sentence Structure",
            "Vocabulary Building & Spelling",
            "Composition - Story and Letter Writing",
            "Punctuation & Capitalization",
            "Clarity in Expression - Cohesion and Coherence",
            "Cloze Tests & Short Answer Questions",
            "Listening and Speaking Basics",
        ],
        (Grade::Primary6, Subject::SocialStudies) => &[
            "Local Community - Roles, Services & Leaders",
            "Local History & Traditions",
            "Civics - Rights, Responsibilities & Good Citizenship",
            "Map Skills - Directions, Symbols, Scale (basic)",
            "Resources and Local Economy - Farming, Trade, Markets",
            "Culture, Customs and Heritage",
            "Environment & Conservation - Local Examples",
            "Health, Sanitation and Community Wellbeing",
            "Basic Local Government Structures and Participation",
            "Road Safety and Community Rules",
        ],
        (Grade::Primary6, Subject::Science) => &[
            "Living & Non-Living Things - Characteristics",
            "Plants - Parts and Functions",
            "Animals - Habitats and Adaptations",
            "Human Body - Health, Nutrition & Hygiene",
            "Materials & Their Properties",
            "Forces and Motion - Simple Examples",
            "Light, Heat and Sound (basic concepts)",
            "Environment and Natural Resources",
            "Simple Experiments and Observations",
        ],
        (Grade::Primary7, Subject::Mathematics) => &[
            "Integers & Operations",
            "Fractions - Addition, Subtraction, Multiplication & Division",
            "Decimals & Percentages",
            "Ratio, Rate & Proportion",
            "Algebraic Expressions & Simple Equations",
            "Geometry - Angles, Triangles and Quadrilaterals",
            "Mensuration - Area, Perimeter and Volume (basic)",
            "Statistics & Probability - Averages and Data Interpretation",
            "Coordinate Geometry - Introduction",
            "Number Theory - Factors, HCF & LCM",
            "Problem Solving Strategies",
        ],
        (Grade::Primary7, Subject::English) => &[
            "Comprehension - Longer Passages & Questioning",
            "Grammar - Sentence Transformation, Tenses, Agreement",
            "Composition - Stories, Letters, Reports and Dialogues",
            "Cloze & Summary Writing",
            "Vocabulary - Synonyms, Antonyms & Contextual Use",
            "Listening Skills and Oral Expression",
            "Directed Writing and Examination Techniques",
        ],
        (Grade::Primary7, Subject::SocialStudies) => &[
            "History - Key Events in Uganda and East Africa (pre-colonial, colonial, independence)",
            "Civics and Governance - Structure of Government, Roles and Rights",
            "Geography - Maps, Physical Features, Weather, Climate and Resources",
            "Economy - Agriculture, Trade, Markets, Production and Consumption",
            "Community Development - Projects, Participation and Leadership",
            "Citizenship Education - Rights, Responsibilities and Human Rights",
            "Culture, National Symbols and Heritage",
            "Local and National Government - Functions and Services",
            "Environmental Issues - Conservation, Deforestation, Pollution",
            "Global Connections - Trade, Aid and Regional Cooperation",
        ],
        (Grade::Primary7, Subject::Science) => &[
            "Living Things - Classification, Life Cycles and Ecosystems",
            "Plants and Animals - Structure and Function",
            "Human Body Systems - Digestive, Respiratory, Circulatory (basic)",
            "Health and Disease Prevention",
            "Forces, Magnets and Motion",
            "Energy - Sources and Uses",
            "Materials and Their Uses (including mixtures and separation)",
            "Environment - Habitats, Conservation and Sustainable Use",
            "Simple Scientific Investigation and Reporting",
        ],
    }
}

/// Topic list, or a single "General - <subject>" entry when none exist
pub fn topics_or_general(grade: Grade, subject: Subject) -> Vec<String> {
    let list = topics(grade, subject);
    if list.is_empty() {
        vec![format!("General - {}", subject)]
    } else {
        list.iter().map(|t| t.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_parse() {
        assert_eq!("p6".parse::<Grade>(), Ok(Grade::Primary6));
        assert_eq!("Primary 7".parse::<Grade>(), Ok(Grade::Primary7));
        assert_eq!("PRIMARY-6".parse::<Grade>(), Ok(Grade::Primary6));
        assert!("p5".parse::<Grade>().is_err());
    }

    #[test]
    fn test_subject_parse() {
        assert_eq!("maths".parse::<Subject>(), Ok(Subject::Mathematics));
        assert_eq!("social-studies".parse::<Subject>(), Ok(Subject::SocialStudies));
        assert_eq!("Social Studies".parse::<Subject>(), Ok(Subject::SocialStudies));
        assert_eq!("SCIENCE".parse::<Subject>(), Ok(Subject::Science));
        assert!("art".parse::<Subject>().is_err());
    }

    #[test]
    fn test_labels_parse_back() {
        for grade in Grade::ALL {
            assert_eq!(grade.label().parse::<Grade>(), Ok(*grade));
        }
        for subject in Subject::ALL {
            assert_eq!(subject.to_string().parse::<Subject>(), Ok(*subject));
        }
    }

    #[test]
    fn test_every_combination_has_topics() {
        for grade in Grade::ALL {
            for subject in Subject::ALL {
                assert!(!topics(*grade, *subject).is_empty(), "{} {}", grade, subject);
            }
        }
    }

    #[test]
    fn test_first_topic() {
        assert_eq!(
            topics_or_general(Grade::Primary7, Subject::Mathematics)[0],
            "Integers & Operations"
        );
    }
}
