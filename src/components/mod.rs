pub mod api_key_form;
pub mod chat_bubble;
pub mod food_card;
pub mod meal_plan_card;
pub mod sidebar;
pub mod stat_card;
pub mod status_badge;
pub mod toast;
