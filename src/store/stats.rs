//! Daily totals derived from the meal log.

use super::model::{MealLog, StatEntry, Stats, UserProfile};

/// Sum of calories over every meal in every slot.
pub fn total_calories(log: &MealLog) -> f64 {
    log.iter().map(|meal| meal.calories).sum()
}

/// Stats with `calories.consumed` recomputed from the meal log.
///
/// Only calories are derived. Protein, carbs and fat keep whatever the record
/// already holds, so meals never move those totals.
pub fn recompute(stats: &Stats, log: &MealLog) -> Stats {
    let mut next = stats.clone();
    next.calories.consumed = total_calories(log);
    next
}

/// Add calories straight onto today's consumed total.
pub fn add_calories(stats: &mut Stats, amount: f64) {
    stats.calories.consumed += amount.max(0.0);
}

/// Copy the profile's daily targets into the stats record.
///
/// A target that is not a finite positive number leaves the current one in place.
pub fn apply_targets(stats: &mut Stats, profile: &UserProfile) {
    set_target(&mut stats.calories, profile.target_calories);
    set_target(&mut stats.protein, profile.target_protein);
    set_target(&mut stats.carbs, profile.target_carbs);
    set_target(&mut stats.fat, profile.target_fat);
}

fn set_target(entry: &mut StatEntry, target: f64) {
    if target.is_finite() && target > 0.0 {
        entry.target = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::model::{Meal, MealSlot};

    fn meal(id: u64, calories: f64) -> Meal {
        Meal::new(id, format!("meal-{}", id), calories, "")
    }

    #[test]
    fn test_total_over_seed_log() {
        // 250 + 200 + 450 + 230 + 150 + 70 + 380
        assert_eq!(total_calories(&MealLog::seed()), 1730.0);
    }

    #[test]
    fn test_total_ignores_slot_distribution() {
        let mut spread = MealLog::default();
        spread.push(MealSlot::Breakfast, meal(1, 100.0));
        spread.push(MealSlot::Lunch, meal(2, 200.0));
        spread.push(MealSlot::Dinner, meal(3, 300.0));

        let mut single = MealLog::default();
        for m in spread.iter().cloned().collect::<Vec<_>>() {
            single.push(MealSlot::Snack, m);
        }

        assert_eq!(total_calories(&spread), total_calories(&single));
    }

    #[test]
    fn test_empty_log_resets_consumed() {
        let mut stats = Stats::default();
        stats.calories.consumed = 999.0;
        let next = recompute(&stats, &MealLog::default());
        assert_eq!(next.calories.consumed, 0.0);
        assert_eq!(next.calories.target, 2200.0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let log = MealLog::seed();
        let once = recompute(&Stats::default(), &log);
        let twice = recompute(&once, &log);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_recompute_leaves_macros_untouched() {
        // Known gap: macro totals never follow the meal log.
        let mut stats = Stats::default();
        stats.protein = StatEntry {
            consumed: 40.0,
            target: 120.0,
        };
        let mut log = MealLog::default();
        let mut shake = meal(1, 300.0);
        shake.protein = Some(30.0);
        shake.carbs = Some(20.0);
        shake.fat = Some(12.0);
        log.push(MealSlot::Snack, shake);

        let next = recompute(&stats, &log);
        assert_eq!(next.calories.consumed, 300.0);
        assert_eq!(next.protein.consumed, 40.0);
        assert_eq!(next.carbs.consumed, 0.0);
        assert_eq!(next.fat.consumed, 0.0);
    }

    #[test]
    fn test_each_meal_addition_recomputes() {
        let mut log = MealLog::default();
        let mut stats = Stats::default();
        for (i, kcal) in [120.0, 80.0, 300.0].into_iter().enumerate() {
            log.push(MealSlot::Lunch, meal(i as u64, kcal));
            stats = recompute(&stats, &log);
        }
        assert_eq!(stats.calories.consumed, 500.0);
    }

    #[test]
    fn test_sequential_adds_both_apply() {
        let mut stats = Stats::default();
        add_calories(&mut stats, 250.0);
        add_calories(&mut stats, 150.0);
        assert_eq!(stats.calories.consumed, 400.0);
    }

    #[test]
    fn test_add_calories_rejects_negative() {
        let mut stats = Stats::default();
        add_calories(&mut stats, -50.0);
        assert_eq!(stats.calories.consumed, 0.0);
    }

    #[test]
    fn test_apply_targets_keeps_consumed() {
        let mut stats = Stats::default();
        stats.carbs.consumed = 90.0;
        let profile = UserProfile {
            target_calories: 1800.0,
            target_carbs: 200.0,
            ..UserProfile::default()
        };
        apply_targets(&mut stats, &profile);
        assert_eq!(stats.calories.target, 1800.0);
        assert_eq!(stats.carbs.target, 200.0);
        assert_eq!(stats.carbs.consumed, 90.0);
    }

    #[test]
    fn test_apply_targets_ignores_non_positive_values() {
        let mut stats = Stats::default();
        let defaults = stats.clone();
        let profile = UserProfile {
            target_calories: 0.0,
            target_protein: f64::NAN,
            target_carbs: 250.0,
            target_fat: -10.0,
            ..UserProfile::default()
        };
        apply_targets(&mut stats, &profile);
        assert_eq!(stats.calories.target, defaults.calories.target);
        assert_eq!(stats.protein.target, defaults.protein.target);
        assert_eq!(stats.carbs.target, 250.0);
        assert_eq!(stats.fat.target, defaults.fat.target);
        for entry in [&stats.calories, &stats.protein, &stats.carbs, &stats.fat] {
            assert!(entry.target > 0.0);
        }
    }
}
