//! The static exercise reference catalog.
//!
//! The catalog is loaded once and never mutated for the lifetime of the
//! process; everything downstream (filtering, selection, routines) works on
//! read-only views of it. Display text for the enums lives in `locale`, keyed
//! by the stable `key()` identities defined here.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Primary muscle regions used for catalog filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
}

impl MuscleGroup {
    pub const ALL: [Self; 6] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Shoulders,
        Self::Arms,
        Self::Core,
    ];

    /// Stable identity, independent of display language.
    pub fn key(self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Core => "core",
        }
    }
}

/// Equipment needed to perform an exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Equipment {
    Dumbbell,
    Barbell,
    Machine,
    Bodyweight,
    Kettlebell,
}

impl Equipment {
    pub const ALL: [Self; 5] = [
        Self::Dumbbell,
        Self::Barbell,
        Self::Machine,
        Self::Bodyweight,
        Self::Kettlebell,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Self::Dumbbell => "dumbbell",
            Self::Barbell => "barbell",
            Self::Machine => "machine",
            Self::Bodyweight => "bodyweight",
            Self::Kettlebell => "kettlebell",
        }
    }
}

/// Skill level an exercise is pitched at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Self; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    pub fn key(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

/// Movement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Compound,
    Isolation,
    Unilateral,
    Stretch,
}

impl Category {
    pub fn key(self) -> &'static str {
        match self {
            Self::Compound => "compound",
            Self::Isolation => "isolation",
            Self::Unilateral => "unilateral",
            Self::Stretch => "stretch",
        }
    }
}

/// Whether a muscle is the main target of an exercise or a supporting one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmphasisRole {
    Primary,
    Secondary,
}

/// One entry in an exercise's muscles-worked breakdown, in authored order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuscleEmphasis {
    pub muscle: String,
    pub role: EmphasisRole,
    /// Relative activation, 0..=100.
    pub percentage: u8,
}

/// An immutable catalog record describing one exercise.
#[derive(Debug, Clone, PartialEq)]
pub struct ExerciseRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    /// Never empty.
    pub muscle_groups: Vec<MuscleGroup>,
    /// Never empty.
    pub equipment: Vec<Equipment>,
    pub difficulty: Difficulty,
    pub media_url: String,
    pub description: String,
    /// Order-significant steps.
    pub instructions: Vec<String>,
    /// Authored order, not sorted.
    pub muscle_emphasis: Vec<MuscleEmphasis>,
}

impl ExerciseRecord {
    fn emphasis(muscle: &str, role: EmphasisRole, percentage: u8) -> MuscleEmphasis {
        MuscleEmphasis {
            muscle: muscle.to_string(),
            role,
            percentage,
        }
    }
}

static CATALOG: LazyLock<Vec<ExerciseRecord>> = LazyLock::new(|| {
    vec![
        ExerciseRecord {
            id: "1".to_string(),
            name: "Barbell Back Squat".to_string(),
            category: Category::Compound,
            muscle_groups: vec![MuscleGroup::Legs],
            equipment: vec![Equipment::Barbell],
            difficulty: Difficulty::Beginner,
            media_url: "https://images.unsplash.com/photo-1534438327276-14e5300c3a48?q=80&w=800&auto=format&fit=crop".to_string(),
            description: "The king of all exercises, primarily targeting the quadriceps and glutes.".to_string(),
            instructions: vec![
                "Set the bar at chest height. Step under the bar and rest it on your upper back muscles.".to_string(),
                "Unrack the bar and take two steps back. Position your feet shoulder-width apart.".to_string(),
                "Lower your hips back and down, keeping your chest up and core tight.".to_string(),
                "Drive through your heels to return to the starting position.".to_string(),
            ],
            muscle_emphasis: vec![
                ExerciseRecord::emphasis("Quadriceps", EmphasisRole::Primary, 90),
                ExerciseRecord::emphasis("Glutes", EmphasisRole::Secondary, 65),
            ],
        },
        ExerciseRecord {
            id: "2".to_string(),
            name: "Deadlift".to_string(),
            category: Category::Compound,
            muscle_groups: vec![MuscleGroup::Back, MuscleGroup::Legs],
            equipment: vec![Equipment::Barbell],
            difficulty: Difficulty::Advanced,
            media_url: "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?q=80&w=800&auto=format&fit=crop".to_string(),
            description: "A total body power movement that targets the posterior chain.".to_string(),
            instructions: vec![
                "Stand with feet hip-width apart, bar over mid-foot.".to_string(),
                "Bend at hips and knees, grip the bar just outside legs.".to_string(),
                "Lift by extending hips and knees to full standing position.".to_string(),
                "Return bar to floor under control.".to_string(),
            ],
            muscle_emphasis: vec![
                ExerciseRecord::emphasis("Posterior Chain", EmphasisRole::Primary, 95),
                ExerciseRecord::emphasis("Lower Back", EmphasisRole::Secondary, 70),
            ],
        },
        ExerciseRecord {
            id: "3".to_string(),
            name: "Walking Lunges".to_string(),
            category: Category::Unilateral,
            muscle_groups: vec![MuscleGroup::Legs],
            equipment: vec![Equipment::Dumbbell],
            difficulty: Difficulty::Beginner,
            media_url: "https://images.unsplash.com/photo-1532384748853-8f54a8f476e2?q=80&w=800&auto=format&fit=crop".to_string(),
            description: "Excellent for dynamic stability and leg strength.".to_string(),
            instructions: vec![
                "Take a large step forward with one leg.".to_string(),
                "Lower hips until both knees are bent at 90-degree angles.".to_string(),
                "Push through the front heel to bring the back leg forward to meet the front.".to_string(),
                "Repeat with opposite leg.".to_string(),
            ],
            muscle_emphasis: vec![
                ExerciseRecord::emphasis("Glutes", EmphasisRole::Primary, 85),
                ExerciseRecord::emphasis("Quadriceps", EmphasisRole::Secondary, 60),
            ],
        },
        ExerciseRecord {
            id: "4".to_string(),
            name: "Romanian Deadlift".to_string(),
            category: Category::Stretch,
            muscle_groups: vec![MuscleGroup::Legs],
            equipment: vec![Equipment::Barbell],
            difficulty: Difficulty::Intermediate,
            media_url: "https://images.unsplash.com/photo-1590239098569-e124dd2d9730?q=80&w=800&auto=format&fit=crop".to_string(),
            description: "A focused exercise for the hamstrings and gluteal muscles.".to_string(),
            instructions: vec![
                "Hold a barbell at hip level with an overhand grip.".to_string(),
                "Hinge at hips, lowering the bar while keeping knees slightly bent.".to_string(),
                "Lower until a stretch is felt in hamstrings.".to_string(),
                "Return to starting position by contracting glutes.".to_string(),
            ],
            muscle_emphasis: vec![
                ExerciseRecord::emphasis("Hamstrings", EmphasisRole::Primary, 90),
                ExerciseRecord::emphasis("Erector Spinae", EmphasisRole::Secondary, 50),
            ],
        },
    ]
});

/// The full exercise catalog, materialized once per process.
pub fn exercise_catalog() -> &'static [ExerciseRecord] {
    &CATALOG
}
