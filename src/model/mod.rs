pub mod development;
pub mod floor;
pub mod house;
pub mod quality;
pub mod room;

pub use development::Development;
pub use floor::{Floor, FloorName, Floors};
pub use house::{House, HouseType, Status};
pub use quality::DataQualityWarning;
pub use room::{MarkerPosition, Room};
