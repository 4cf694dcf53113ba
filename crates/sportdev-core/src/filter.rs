//! Multi-criteria exercise filtering.
//!
//! The filter is a pure predicate over the read-only catalog: it never
//! re-sorts, never mutates, and never fails. Empty constraints match
//! everything, so the default criteria are an identity filter. The catalog is
//! small and bounded, so the whole thing is recomputed on every criteria
//! change with no incremental index.

use std::collections::HashSet;

use crate::catalog::{Difficulty, Equipment, ExerciseRecord, MuscleGroup};

/// The user's current set of filter constraints.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Case-insensitive substring match against the exercise name.
    /// Blank (empty or whitespace-only) means no constraint.
    pub search_text: String,
    /// Empty set means no constraint.
    pub muscle_filter: HashSet<MuscleGroup>,
    /// Empty set means no constraint.
    pub equipment_filter: HashSet<Equipment>,
    /// Absent means no constraint.
    pub difficulty_filter: Option<Difficulty>,
}

impl FilterCriteria {
    /// Add the muscle group to the filter, or remove it if already present.
    pub fn toggle_muscle(&mut self, group: MuscleGroup) {
        if !self.muscle_filter.remove(&group) {
            self.muscle_filter.insert(group);
        }
    }

    /// Add the equipment to the filter, or remove it if already present.
    pub fn toggle_equipment(&mut self, equipment: Equipment) {
        if !self.equipment_filter.remove(&equipment) {
            self.equipment_filter.insert(equipment);
        }
    }

    /// Drop every constraint.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Select the catalog records matching all four criteria clauses, preserving
/// catalog order among the matches.
pub fn filter_exercises<'a>(
    catalog: &'a [ExerciseRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a ExerciseRecord> {
    let needle = criteria.search_text.trim().to_lowercase();

    catalog
        .iter()
        .filter(|record| {
            let matches_search =
                needle.is_empty() || record.name.to_lowercase().contains(&needle);
            let matches_muscle = criteria.muscle_filter.is_empty()
                || record
                    .muscle_groups
                    .iter()
                    .any(|group| criteria.muscle_filter.contains(group));
            let matches_equipment = criteria.equipment_filter.is_empty()
                || record
                    .equipment
                    .iter()
                    .any(|equipment| criteria.equipment_filter.contains(equipment));
            let matches_difficulty = criteria
                .difficulty_filter
                .is_none_or(|difficulty| record.difficulty == difficulty);

            matches_search && matches_muscle && matches_equipment && matches_difficulty
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::exercise_catalog;

    fn names<'a>(records: &'a [&'a ExerciseRecord]) -> Vec<&'a str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_return_full_catalog_in_order() {
        let catalog = exercise_catalog();
        let result = filter_exercises(catalog, &FilterCriteria::default());
        assert_eq!(result.len(), catalog.len());
        for (got, expected) in result.iter().zip(catalog.iter()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn test_equipment_filter_preserves_catalog_order() {
        let mut criteria = FilterCriteria::default();
        criteria.equipment_filter.insert(Equipment::Barbell);

        let result = filter_exercises(exercise_catalog(), &criteria);
        assert_eq!(
            names(&result),
            vec!["Barbell Back Squat", "Deadlift", "Romanian Deadlift"]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let criteria = FilterCriteria {
            search_text: "DEAD".to_string(),
            ..Default::default()
        };

        let result = filter_exercises(exercise_catalog(), &criteria);
        assert_eq!(names(&result), vec!["Deadlift", "Romanian Deadlift"]);
    }

    #[test]
    fn test_whitespace_search_is_no_constraint() {
        let criteria = FilterCriteria {
            search_text: "   ".to_string(),
            ..Default::default()
        };

        let result = filter_exercises(exercise_catalog(), &criteria);
        assert_eq!(result.len(), exercise_catalog().len());
    }

    #[test]
    fn test_muscle_filter_matches_on_any_intersection() {
        let mut criteria = FilterCriteria::default();
        criteria.muscle_filter.insert(MuscleGroup::Back);

        // Deadlift lists Back and Legs; one shared group is enough.
        let result = filter_exercises(exercise_catalog(), &criteria);
        assert_eq!(names(&result), vec!["Deadlift"]);
    }

    #[test]
    fn test_all_clauses_combine_with_and() {
        let mut criteria = FilterCriteria {
            search_text: "dead".to_string(),
            difficulty_filter: Some(Difficulty::Advanced),
            ..Default::default()
        };
        criteria.equipment_filter.insert(Equipment::Barbell);

        let result = filter_exercises(exercise_catalog(), &criteria);
        assert_eq!(names(&result), vec!["Deadlift"]);
    }

    #[test]
    fn test_unmatched_criteria_yield_empty_result() {
        let mut criteria = FilterCriteria::default();
        criteria.equipment_filter.insert(Equipment::Kettlebell);

        let result = filter_exercises(exercise_catalog(), &criteria);
        assert!(result.is_empty());
    }

    #[test]
    fn test_toggle_muscle_round_trips() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_muscle(MuscleGroup::Legs);
        assert!(criteria.muscle_filter.contains(&MuscleGroup::Legs));
        criteria.toggle_muscle(MuscleGroup::Legs);
        assert!(criteria.muscle_filter.is_empty());
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut criteria = FilterCriteria {
            search_text: "squat".to_string(),
            difficulty_filter: Some(Difficulty::Beginner),
            ..Default::default()
        };
        criteria.toggle_muscle(MuscleGroup::Legs);
        criteria.toggle_equipment(Equipment::Barbell);

        criteria.clear();
        assert_eq!(criteria, FilterCriteria::default());
    }
}
