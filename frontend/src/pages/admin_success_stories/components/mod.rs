pub mod story_card;
pub mod story_list;
