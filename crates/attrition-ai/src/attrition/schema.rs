//! The feature schema shared with the trained classifier.
//!
//! Field order and the legal categorical value lists must match the encoding
//! used when the artifact was trained. The schema is a compile-time contract:
//! changing anything here requires retraining and re-exporting the model.

/// Number of values the classifier expects per request.
///
/// Only [`REQUIRED_FIELDS`] entries are populated from the request; the
/// trailing slots are zero-filled. Their meaning belongs to the artifact's
/// training pipeline, not to this service.
pub const FEATURE_COUNT: usize = 33;

/// The 28 request fields, in the exact order they occupy the feature vector.
pub const REQUIRED_FIELDS: [&str; 28] = [
    "Age",
    "BusinessTravel",
    "Department",
    "DistanceFromHome",
    "Education",
    "EducationField",
    "EnvironmentSatisfaction",
    "Gender",
    "HourlyRate",
    "JobInvolvement",
    "JobLevel",
    "JobRole",
    "JobSatisfaction",
    "MaritalStatus",
    "MonthlyIncome",
    "NumCompaniesWorked",
    "OverTime",
    "PercentSalaryHike",
    "RelationshipSatisfaction",
    "StockOptionLevel",
    "TotalWorkingYears",
    "TrainingTimesLastYear",
    "WorkLifeBalance",
    "YearsAtCompany",
    "YearsInCurrentRole",
    "YearsSinceLastPromotion",
    "YearsWithCurrManager",
    "SalarySlab",
];

/// Categorical fields and their legal values. A value's position in its list
/// is its encoded integer.
pub const CATEGORY_TABLES: [(&str, &[&str]); 8] = [
    (
        "BusinessTravel",
        &["Travel_Rarely", "Travel_Frequently", "Non-Travel"],
    ),
    (
        "Department",
        &["Sales", "Research & Development", "Human Resources"],
    ),
    (
        "EducationField",
        &[
            "Life Sciences",
            "Medical",
            "Marketing",
            "Technical Degree",
            "Human Resources",
            "Other",
        ],
    ),
    ("Gender", &["Male", "Female"]),
    (
        "JobRole",
        &[
            "Sales Representative",
            "Research Scientist",
            "Laboratory Technician",
            "Manufacturing Director",
            "Healthcare Representative",
            "Manager",
            "Human Resources",
            "Sales Executive",
            "Research Director",
        ],
    ),
    ("MaritalStatus", &["Single", "Married", "Divorced"]),
    ("OverTime", &["Yes", "No"]),
    ("SalarySlab", &["Upto 5k", "5k-10k", "10k-20k", "Above 20k"]),
];

/// Legal values for a categorical field, or `None` for numeric fields.
pub fn legal_values(field: &str) -> Option<&'static [&'static str]> {
    CATEGORY_TABLES
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, values)| *values)
}
