//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Rate Card
//!
//! - [`ServiceTier`], [`PackageCategory`]: pricing keys
//! - [`ServiceRate`], [`CategoryRate`]: fixed rate table entries
//!
//! ## Quantities
//!
//! - [`Weight`]: validated shipment weight in kilograms
//! - [`Money`]: exact currency amount, rounded only for display
//! - [`Dimensions`]: `LxWxH` package size and volumetric weight
//!
//! ## Quote Metadata
//!
//! - [`DeliveryDate`]: estimated delivery calendar date
//! - [`TrackingNumber`], [`TrackingPrefix`]: quote display token
//! - [`Timestamp`]: UTC instant
//!
//! ## Arithmetic
//!
//! - [`CheckedArithmetic`]: overflow-safe decimal operations
//! - [`round_currency`]: presentation rounding

pub mod arithmetic;
pub mod delivery_date;
pub mod dimensions;
pub mod enums;
pub mod money;
pub mod postal_code;
pub mod rates;
pub mod timestamp;
pub mod tracking_number;
pub mod weight;

pub use arithmetic::{
    ArithmeticError, ArithmeticResult, CURRENCY_SCALE, CheckedArithmetic, round_currency,
};
pub use delivery_date::DeliveryDate;
pub use dimensions::{DEFAULT_DIMENSIONAL_DIVISOR, Dimensions, is_valid_dimensions};
pub use enums::{PackageCategory, ParseEnumError, ServiceTier, WeightUnit};
pub use money::Money;
pub use postal_code::validate_postal_code;
pub use rates::{CategoryRate, ServiceRate};
pub use timestamp::Timestamp;
pub use tracking_number::{TrackingNumber, TrackingPrefix};
pub use weight::{MAX_WEIGHT_KG, Weight, convert_weight};
