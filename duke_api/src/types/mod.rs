mod measure;
pub use self::measure::{MeasureCategory, MeasureLevel};

mod state;
pub use self::state::{State, StateID};

mod demographic;
pub use self::demographic::DemographicData;
