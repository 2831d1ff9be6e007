//! Application state shared by every page.

pub mod model;
pub mod persisted;
pub mod stats;

use std::rc::Rc;

use chrono::Utc;
use leptos::prelude::*;

use model::{
    next_message_id, ChatMessage, FoodInfo, Meal, MealLog, MealSlot, Stats, Theme, UserProfile,
    CLEARED_GREETING, GREETING,
};
use persisted::{browser_backend, persisted_signal, StorageBackend};

pub const THEME_KEY: &str = "theme";
pub const STATS_KEY: &str = "app-stats";
pub const MEALS_KEY: &str = "app-meals";
pub const CHAT_KEY: &str = "ai-chat-messages";
pub const PROFILE_KEY: &str = "user-profile";

/// Image label given to meals added from a chat analysis.
const AI_MEAL_IMAGE: &str = "AI generated meal analysis icon";

/// Handle to the persisted state. Created once in `App` and provided as context.
#[derive(Clone, Copy)]
pub struct AppStore {
    pub theme: RwSignal<Theme>,
    pub stats: RwSignal<Stats>,
    pub meals: RwSignal<MealLog>,
    pub chat: RwSignal<Vec<ChatMessage>>,
    pub profile: RwSignal<UserProfile>,
}

impl AppStore {
    pub fn new() -> Self {
        Self::with_backend(browser_backend())
    }

    /// Wire every persisted signal to `backend` and keep stats following the meal log.
    pub fn with_backend(backend: Rc<dyn StorageBackend>) -> Self {
        let theme = persisted_signal(backend.clone(), THEME_KEY, Theme::default());
        let stats = persisted_signal(backend.clone(), STATS_KEY, Stats::default());
        let meals = persisted_signal(backend.clone(), MEALS_KEY, MealLog::seed());
        let chat = persisted_signal(
            backend.clone(),
            CHAT_KEY,
            vec![ChatMessage::ai(1, GREETING, Utc::now())],
        );
        let profile = persisted_signal(backend, PROFILE_KEY, UserProfile::default());

        // Tracks `meals` only; `stats` is written untracked.
        Effect::new(move |_| {
            let log = meals.get();
            stats.update(|s| *s = stats::recompute(s, &log));
        });

        Self {
            theme,
            stats,
            meals,
            chat,
            profile,
        }
    }

    pub fn toggle_theme(&self) {
        self.theme.update(|t| *t = t.toggled());
    }

    pub fn add_meal(&self, mut meal: Meal, slot: MealSlot) {
        self.meals.update(|log| {
            meal.id = log.next_id(now_millis());
            log.push(slot, meal);
        });
    }

    pub fn add_food_info(&self, info: &FoodInfo) {
        let meal = Meal::new(0, info.name.clone(), f64::from(info.calories), AI_MEAL_IMAGE);
        self.add_meal(meal, MealSlot::Lunch);
    }

    pub fn add_calories(&self, amount: f64) {
        self.stats.update(|s| stats::add_calories(s, amount));
    }

    pub fn save_profile(&self, profile: UserProfile) {
        self.stats.update(|s| stats::apply_targets(s, &profile));
        self.profile.set(profile);
    }

    /// Append a message built from a fresh id and the current time.
    pub fn push_message(&self, build: impl FnOnce(u64, chrono::DateTime<Utc>) -> ChatMessage) {
        self.chat.update(|messages| {
            let id = next_message_id(messages, now_millis());
            messages.push(build(id, Utc::now()));
        });
    }

    pub fn clear_chat(&self) {
        self.chat.set(vec![ChatMessage::ai(now_millis(), CLEARED_GREETING, Utc::now())]);
    }
}

fn now_millis() -> u64 {
    js_sys::Date::now() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use model::MealSlot;
    use persisted::MemoryStorage;
    use tokio::task::LocalSet;

    /// Let spawned effects run until the reactive graph is quiet.
    async fn settle() {
        for _ in 0..4 {
            Executor::tick().await;
        }
    }

    fn stored<T: serde::de::DeserializeOwned>(storage: &MemoryStorage, key: &str) -> Option<T> {
        storage
            .get_item(key)
            .unwrap()
            .map(|raw| serde_json::from_str(&raw).unwrap())
    }

    #[tokio::test]
    async fn test_signal_writes_on_mount_and_on_change() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let storage = Rc::new(MemoryStorage::new());
                let theme = persisted_signal(storage.clone(), THEME_KEY, Theme::Light);
                settle().await;
                assert_eq!(stored::<Theme>(&storage, THEME_KEY), Some(Theme::Light));

                theme.set(Theme::Dark);
                settle().await;
                assert_eq!(stored::<Theme>(&storage, THEME_KEY), Some(Theme::Dark));
            })
            .await;
    }

    #[tokio::test]
    async fn test_meal_log_change_recomputes_and_persists_stats() {
        let _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        LocalSet::new()
            .run_until(async {
                let storage = Rc::new(MemoryStorage::new());
                let store = AppStore::with_backend(storage.clone());
                settle().await;
                assert_eq!(store.stats.get_untracked().calories.consumed, 1730.0);

                store.meals.update(|log| {
                    log.push(MealSlot::Dinner, Meal::new(99, "Pizza", 800.0, "pizza"));
                });
                settle().await;

                assert_eq!(store.stats.get_untracked().calories.consumed, 2530.0);
                let saved: Stats = stored(&storage, STATS_KEY).unwrap();
                assert_eq!(saved.calories.consumed, 2530.0);
                let log: MealLog = stored(&storage, MEALS_KEY).unwrap();
                assert_eq!(log.slot(MealSlot::Dinner).last().map(|m| m.id), Some(99));
            })
            .await;
    }
}
