mod athlete;
mod category;
mod training_center;

pub use athlete::{creation_timestamp, Athlete, AthleteFilter, AthleteView};
pub use category::Category;
pub use training_center::TrainingCenter;
