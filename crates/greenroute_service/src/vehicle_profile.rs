use std::{fmt::Display, str::FromStr};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Deserialize, Serialize, JsonSchema, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VehicleType {
    #[default]
    Car,
    Truck,
    Bus,
    Motorcycle,
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FuelType {
    Electric,
    Hybrid,
    #[default]
    Petrol,
    Diesel,
}

#[derive(Deserialize, Serialize, JsonSchema, Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VehicleProfile {
    pub vehicle_type: VehicleType,
    pub fuel_type: FuelType,
}

impl VehicleProfile {
    pub fn new(vehicle_type: VehicleType, fuel_type: FuelType) -> Self {
        Self {
            vehicle_type,
            fuel_type,
        }
    }
}

impl Display for VehicleProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.vehicle_type, self.fuel_type)
    }
}

impl Display for VehicleType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                VehicleType::Car => "Car",
                VehicleType::Truck => "Truck",
                VehicleType::Bus => "Bus",
                VehicleType::Motorcycle => "Motorcycle",
            }
        )
    }
}

impl Display for FuelType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                FuelType::Electric => "Electric",
                FuelType::Hybrid => "Hybrid",
                FuelType::Petrol => "Petrol",
                FuelType::Diesel => "Diesel",
            }
        )
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown {kind} {value:?}")]
pub struct ParseProfileError {
    kind: &'static str,
    value: String,
}

impl FromStr for VehicleType {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "car" => Ok(VehicleType::Car),
            "truck" => Ok(VehicleType::Truck),
            "bus" => Ok(VehicleType::Bus),
            "motorcycle" | "motorbike" => Ok(VehicleType::Motorcycle),
            _ => Err(ParseProfileError {
                kind: "vehicle type",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for FuelType {
    type Err = ParseProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "electric" | "ev" => Ok(FuelType::Electric),
            "hybrid" => Ok(FuelType::Hybrid),
            "petrol" | "gasoline" => Ok(FuelType::Petrol),
            "diesel" => Ok(FuelType::Diesel),
            _ => Err(ParseProfileError {
                kind: "fuel type",
                value: s.to_string(),
            }),
        }
    }
}
