//! Display labels for the catalog enums.
//!
//! Enum identities are stable keys; what the user sees is a per-locale lookup.
//! Catalog logic never depends on these strings.

use crate::catalog::{Category, Difficulty, EmphasisRole, Equipment, MuscleGroup};

/// Languages the interface renders in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl MuscleGroup {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Chest, Locale::En) => "Chest",
            (Self::Chest, Locale::Es) => "Pecho",
            (Self::Back, Locale::En) => "Back",
            (Self::Back, Locale::Es) => "Espalda",
            (Self::Legs, Locale::En) => "Legs",
            (Self::Legs, Locale::Es) => "Piernas",
            (Self::Shoulders, Locale::En) => "Shoulders",
            (Self::Shoulders, Locale::Es) => "Hombros",
            (Self::Arms, Locale::En) => "Arms",
            (Self::Arms, Locale::Es) => "Brazos",
            (Self::Core, Locale::En) => "Core",
            (Self::Core, Locale::Es) => "Core",
        }
    }
}

impl Equipment {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Dumbbell, Locale::En) => "Dumbbell",
            (Self::Dumbbell, Locale::Es) => "Mancuerna",
            (Self::Barbell, Locale::En) => "Barbell",
            (Self::Barbell, Locale::Es) => "Barra",
            (Self::Machine, Locale::En) => "Machine",
            (Self::Machine, Locale::Es) => "Máquina",
            (Self::Bodyweight, Locale::En) => "Bodyweight",
            (Self::Bodyweight, Locale::Es) => "Peso corporal",
            (Self::Kettlebell, Locale::En) => "Kettlebell",
            (Self::Kettlebell, Locale::Es) => "Pesa rusa",
        }
    }
}

impl Difficulty {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Beginner, Locale::En) => "Beginner",
            (Self::Beginner, Locale::Es) => "Principiante",
            (Self::Intermediate, Locale::En) => "Intermediate",
            (Self::Intermediate, Locale::Es) => "Intermedio",
            (Self::Advanced, Locale::En) => "Advanced",
            (Self::Advanced, Locale::Es) => "Avanzado",
        }
    }
}

impl Category {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Compound, Locale::En) => "Compound",
            (Self::Compound, Locale::Es) => "Compuesto",
            (Self::Isolation, Locale::En) => "Isolation",
            (Self::Isolation, Locale::Es) => "Aislamiento",
            (Self::Unilateral, Locale::En) => "Unilateral",
            (Self::Unilateral, Locale::Es) => "Unilateral",
            (Self::Stretch, Locale::En) => "Stretch",
            (Self::Stretch, Locale::Es) => "Estiramiento",
        }
    }
}

impl EmphasisRole {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Self::Primary, Locale::En) => "Primary",
            (Self::Primary, Locale::Es) => "Primario",
            (Self::Secondary, Locale::En) => "Secondary",
            (Self::Secondary, Locale::Es) => "Secundario",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_differ_from_keys() {
        // keys stay lowercase and stable; labels are presentation only
        assert_eq!(MuscleGroup::Chest.key(), "chest");
        assert_eq!(MuscleGroup::Chest.label(Locale::En), "Chest");
        assert_eq!(MuscleGroup::Chest.label(Locale::Es), "Pecho");
    }

    #[test]
    fn test_every_muscle_group_has_labels() {
        for group in MuscleGroup::ALL {
            assert!(!group.label(Locale::En).is_empty());
            assert!(!group.label(Locale::Es).is_empty());
        }
    }

    #[test]
    fn test_emphasis_role_labels() {
        assert_eq!(EmphasisRole::Primary.label(Locale::Es), "Primario");
        assert_eq!(EmphasisRole::Secondary.label(Locale::Es), "Secundario");
    }
}
