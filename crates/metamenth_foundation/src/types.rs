//! Enumerated attribute types for building entities.
//!
//! Every enumeration carries an underlying string value. Query criteria compare
//! enumerations by that value, so two variants are equal exactly when their
//! values are equal.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

macro_rules! value_enum {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$vmeta:meta])* $variant:ident => $value:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// All variants in declaration order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The underlying value of this variant.
            #[must_use]
            pub const fn value(self) -> &'static str {
                match self {
                    $($name::$variant => $value),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.value())
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.value() == s)
                    .ok_or_else(|| {
                        Error::validation(format!("unknown {} value: {s}", stringify!($name)))
                    })
            }
        }
    };
}

value_enum! {
    /// Phenomena a sensor can measure.
    SensorMeasure {
        /// Temperature.
        Temperature => "Temperature",
        /// Pressure.
        Pressure => "Pressure",
        /// Gas velocity.
        GasVelocity => "GasVelocity",
        /// Liquid velocity.
        LiquidVelocity => "LiquidVelocity",
        /// Luminance.
        Luminance => "Luminance",
        /// Carbon dioxide concentration.
        CarbonDioxide => "CarbonDioxide",
        /// Noise.
        Noise => "Noise",
        /// Energy.
        Energy => "Energy",
        /// Power.
        Power => "Power",
        /// Voltage.
        Voltage => "Voltage",
        /// Smoke.
        Smoke => "Smoke",
        /// Occupancy.
        Occupancy => "Occupancy",
        /// Daylight.
        Daylight => "Daylight",
        /// Air volume.
        AirVolume => "AirVolume",
        /// Relative humidity.
        Humidity => "Humidity",
        /// Anything else.
        Other => "Other",
    }
}

value_enum! {
    /// Measurement units.
    MeasurementUnit {
        /// Degree Celsius.
        DegreeCelsius => "Degree Celsius (°C)",
        /// Pascal.
        Pascal => "Pascal (Pa)",
        /// Meters per second.
        MetersPerSecond => "Meters Per Second (MPS)",
        /// Parts per million.
        PartsPerMillion => "Parts Per Million (PPM)",
        /// Percent.
        Percent => "Percent (%)",
        /// Lux.
        Lux => "Lux (lx)",
        /// Decibel.
        Decibel => "Decibel (dB)",
        /// Volt.
        Volt => "Volt (V)",
        /// Watts.
        Watts => "Watts (W)",
        /// Kilowatts.
        Kilowatts => "Kilowatts (kW)",
        /// Kilowatt hours.
        KilowattHours => "Kilowatt Hours (kWh)",
        /// Cubic meters.
        CubicMeters => "Cubic Meters (m³)",
        /// Square meters.
        SquareMeters => "Square Meters (m²)",
        /// Meters.
        Meters => "Meters (m)",
        /// Kilograms.
        Kilograms => "Kilograms (kg)",
        /// Presence flag.
        Presence => "Presence",
    }
}

value_enum! {
    /// How a sensor measures.
    SensorMeasureType {
        /// PT-100 resistance thermometer.
        Pt100 => "PT100",
        /// Type-A thermocouple.
        ThermocoupleTypeA => "ThermocoupleTypeA",
        /// Passive infrared.
        PassiveInfrared => "PassiveInfrared",
        /// Non-dispersive infrared.
        NonDispersiveInfrared => "NonDispersiveInfrared",
        /// Anything else.
        Other => "Other",
    }
}

value_enum! {
    /// Kinds of meters.
    MeterType {
        /// Power meter.
        Power => "Power",
        /// Electricity meter.
        Electricity => "Electricity",
        /// Charge/discharge meter.
        ChargeDischarge => "ChargeDischarge",
        /// Gas meter.
        Gas => "Gas",
        /// Water meter.
        Water => "Water",
        /// Flow meter.
        Flow => "Flow",
    }
}

value_enum! {
    /// Building types.
    BuildingType {
        /// Commercial.
        Commercial => "Commercial",
        /// Residential.
        Residential => "Residential",
        /// Institutional.
        Institutional => "Institutional",
        /// Industrial.
        Industrial => "Industrial",
    }
}

value_enum! {
    /// Floor types.
    FloorType {
        /// Regular floor.
        Regular => "Regular",
        /// Basement.
        Basement => "Basement",
        /// Rooftop.
        Rooftop => "Rooftop",
        /// Mezzanine.
        Mezzanine => "Mezzanine",
    }
}

value_enum! {
    /// Room types.
    RoomType {
        /// Bedroom.
        Bedroom => "Bedroom",
        /// Office.
        Office => "Office",
        /// Classroom.
        Classroom => "Classroom",
        /// Kitchen.
        Kitchen => "Kitchen",
        /// Bathroom.
        Bathroom => "Bathroom",
        /// Mechanical room.
        Mechanical => "Mechanical",
        /// Storage room.
        Storage => "Storage",
        /// Anything else.
        Other => "Other",
    }
}

value_enum! {
    /// Open space types.
    OpenSpaceType {
        /// Parking garage.
        ParkingGarage => "Parking Garage",
        /// Pool area.
        PoolArea => "Pool Area",
        /// Open office.
        OpenOffice => "Open Office",
        /// Hall.
        Hall => "Hall",
        /// Corridor.
        Corridor => "Corridor",
        /// Stair area.
        StairArea => "StairArea",
        /// Dining area.
        DiningArea => "DinningArea",
        /// Anything else.
        Other => "Other",
    }
}

value_enum! {
    /// Zone types.
    ZoneType {
        /// Thermal (HVAC) zone.
        Hvac => "HVAC",
        /// Lighting zone.
        Lighting => "Lighting",
        /// Security zone.
        Security => "Security",
        /// Anything else.
        Other => "Other",
    }
}

value_enum! {
    /// HVAC zone subtypes.
    HvacType {
        /// Interior zone.
        Interior => "Interior",
        /// Perimeter zone.
        Perimeter => "Perimeter",
        /// Not an HVAC zone.
        None => "None",
    }
}

value_enum! {
    /// Duct types.
    DuctType {
        /// Air duct.
        Air => "Air",
        /// Water pipe.
        Water => "Water",
        /// Refrigerant line.
        Refrigerant => "Refrigerant",
    }
}

value_enum! {
    /// Duct subtypes.
    DuctSubType {
        /// Fresh air.
        FreshAir => "FreshAir",
        /// Return air.
        ReturnAir => "ReturnAir",
        /// Supply air.
        SupplyAir => "SupplyAir",
        /// Exhaust air.
        ExhaustAir => "ExhaustAir",
        /// Glycol.
        Glycol => "Glycol",
        /// Hot water.
        HotWater => "HotWater",
        /// Cold water.
        ColdWater => "ColdWater",
        /// Hot and cold water.
        HotAndColdWater => "HotAndColdWater",
        /// Anything else.
        Other => "Other",
    }
}

value_enum! {
    /// Power states.
    PowerState {
        /// On.
        On => "On",
        /// Off.
        Off => "Off",
        /// Standby.
        Standby => "Standby",
    }
}

value_enum! {
    /// Damper types.
    DamperType {
        /// Manual volume damper.
        ManualVolume => "ManualVolume",
        /// Motorized damper.
        Motorized => "Motorized",
        /// Fire damper.
        Fire => "Fire",
        /// Backdraft damper.
        Backdraft => "Backdraft",
    }
}

value_enum! {
    /// Heat exchanger constructions.
    HeatExchangerType {
        /// Fin tube.
        FinTube => "FinTube",
        /// Plate.
        Plate => "Plate",
        /// Shell and tube.
        ShellAndTube => "ShellAndTube",
    }
}

value_enum! {
    /// Heat exchanger flow arrangements.
    HeatExchangerFlowType {
        /// Parallel flow.
        Parallel => "Parallel",
        /// Counter flow.
        Counter => "Counter",
        /// Cross flow.
        Cross => "Cross",
    }
}

value_enum! {
    /// Filter grades.
    FilterType {
        /// Pleated.
        Pleated => "Pleated",
        /// HEPA.
        Hepa => "HEPA",
        /// Carbon.
        Carbon => "Carbon",
    }
}

value_enum! {
    /// Air volume box regulation.
    AirVolumeType {
        /// Variable air volume.
        Variable => "VariableAirVolume",
        /// Constant air volume.
        Constant => "ConstantAirVolume",
    }
}

value_enum! {
    /// Boiler fuels.
    BoilerCategory {
        /// Natural gas.
        NaturalGas => "NaturalGas",
        /// Electric.
        Electric => "Electric",
        /// Oil.
        Oil => "Oil",
    }
}

value_enum! {
    /// Appliance types.
    ApplianceType {
        /// Camera.
        Camera => "Camera",
        /// Refrigerator.
        Refrigerator => "Refrigerator",
        /// Thermostat.
        Thermostat => "Thermostat",
        /// Printer.
        Printer => "Printer",
        /// Anything else.
        Other => "Other",
    }
}

value_enum! {
    /// Appliance categories.
    ApplianceCategory {
        /// Office appliance.
        Office => "Office",
        /// Smart appliance.
        Smart => "Smart",
        /// Household appliance.
        Household => "Household",
    }
}
