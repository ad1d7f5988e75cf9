// SPDX-License-Identifier: MPL-2.0
pub mod measure;

pub use measure::Measured;
