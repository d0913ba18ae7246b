mod common;
pub use self::common::Query;

mod measure_years;
pub use self::measure_years::MeasureYearsQuery;

mod cube;
pub use self::cube::CubeQuery;
