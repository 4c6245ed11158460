//! Category 048, monoradar target reports.

mod acas;
mod items;

pub use acas::AcasResolutionAdvisory;
pub use acas::ThreatIdentity;
pub use items::*;

use crate::error::DecodeError;
use crate::error::Result;
use crate::item::Context;
use crate::record::decode_as;
use crate::record::Category;
use crate::record::Record;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cat048;

/// A decoded Category 048 item, one variant per UAP entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Cat048Item {
    DataSourceIdentifier(DataSourceIdentifier),
    TimeOfDay(TimeOfDay),
    TargetReportDescriptor(TargetReportDescriptor),
    MeasuredPositionPolar(MeasuredPositionPolar),
    Mode3ACode(Mode3ACode),
    FlightLevel(FlightLevel),
    RadarPlotCharacteristics(RadarPlotCharacteristics),
    AircraftAddress(AircraftAddress),
    AircraftIdentification(AircraftIdentification),
    BdsRegisterData(BdsRegisterData),
    TrackNumber(TrackNumber),
    CalculatedPositionCartesian(CalculatedPositionCartesian),
    CalculatedVelocityPolar(CalculatedVelocityPolar),
    TrackStatus(TrackStatus),
    TrackQuality(TrackQuality),
    WarningErrorConditions(WarningErrorConditions),
    Mode3ACodeConfidence(Mode3ACodeConfidence),
    ModeCCodeConfidence(ModeCCodeConfidence),
    Height3D(Height3D),
    RadialDopplerSpeed(RadialDopplerSpeed),
    CommsAcasCapability(CommsAcasCapability),
    AcasResolutionAdvisory(AcasResolutionAdvisory),
    Mode1Code(Mode1Code),
    Mode2Code(Mode2Code),
    Mode1CodeConfidence(Mode1CodeConfidence),
    Mode2CodeConfidence(Mode2CodeConfidence),
    SpecialPurpose(SpecialPurpose),
    ReservedExpansion(ReservedExpansion),
}

pub const FRN_BDS_REGISTER_DATA: usize = 10;
pub const FRN_ACAS_RESOLUTION_ADVISORY: usize = 22;

impl Category for Cat048 {
    const CATEGORY: u8 = 48;
    const FRNS: usize = 28;

    type Item = Cat048Item;

    fn decode_item(
        frn: usize,
        input: &[u8],
        offset: usize,
        ctx: &mut Context<'_>,
    ) -> Result<(Cat048Item, usize)> {
        match frn {
            1 => decode_as(input, offset, ctx, Cat048Item::DataSourceIdentifier),
            2 => decode_as(input, offset, ctx, Cat048Item::TimeOfDay),
            3 => decode_as(input, offset, ctx, Cat048Item::TargetReportDescriptor),
            4 => decode_as(input, offset, ctx, Cat048Item::MeasuredPositionPolar),
            5 => decode_as(input, offset, ctx, Cat048Item::Mode3ACode),
            6 => decode_as(input, offset, ctx, Cat048Item::FlightLevel),
            7 => decode_as(input, offset, ctx, Cat048Item::RadarPlotCharacteristics),
            8 => decode_as(input, offset, ctx, Cat048Item::AircraftAddress),
            9 => decode_as(input, offset, ctx, Cat048Item::AircraftIdentification),
            10 => decode_as(input, offset, ctx, Cat048Item::BdsRegisterData),
            11 => decode_as(input, offset, ctx, Cat048Item::TrackNumber),
            12 => decode_as(input, offset, ctx, Cat048Item::CalculatedPositionCartesian),
            13 => decode_as(input, offset, ctx, Cat048Item::CalculatedVelocityPolar),
            14 => decode_as(input, offset, ctx, Cat048Item::TrackStatus),
            15 => decode_as(input, offset, ctx, Cat048Item::TrackQuality),
            16 => decode_as(input, offset, ctx, Cat048Item::WarningErrorConditions),
            17 => decode_as(input, offset, ctx, Cat048Item::Mode3ACodeConfidence),
            18 => decode_as(input, offset, ctx, Cat048Item::ModeCCodeConfidence),
            19 => decode_as(input, offset, ctx, Cat048Item::Height3D),
            20 => decode_as(input, offset, ctx, Cat048Item::RadialDopplerSpeed),
            21 => decode_as(input, offset, ctx, Cat048Item::CommsAcasCapability),
            22 => decode_as(input, offset, ctx, Cat048Item::AcasResolutionAdvisory),
            23 => decode_as(input, offset, ctx, Cat048Item::Mode1Code),
            24 => decode_as(input, offset, ctx, Cat048Item::Mode2Code),
            25 => decode_as(input, offset, ctx, Cat048Item::Mode1CodeConfidence),
            26 => decode_as(input, offset, ctx, Cat048Item::Mode2CodeConfidence),
            27 => decode_as(input, offset, ctx, Cat048Item::SpecialPurpose),
            28 => decode_as(input, offset, ctx, Cat048Item::ReservedExpansion),
            _ => Err(DecodeError::UndefinedItem {
                category: Cat048::CATEGORY,
                frn,
            }),
        }
    }
}

impl Record<Cat048> {
    pub fn acas_resolution_advisory(&self) -> Option<&AcasResolutionAdvisory> {
        match self.item(FRN_ACAS_RESOLUTION_ADVISORY) {
            Some(Cat048Item::AcasResolutionAdvisory(advisory)) => Some(advisory),
            _ => None,
        }
    }

    pub fn bds_register_data(&self) -> Option<&BdsRegisterData> {
        match self.item(FRN_BDS_REGISTER_DATA) {
            Some(Cat048Item::BdsRegisterData(data)) => Some(data),
            _ => None,
        }
    }

    pub fn data_source(&self) -> Option<&DataSourceIdentifier> {
        match self.item(1) {
            Some(Cat048Item::DataSourceIdentifier(source)) => Some(source),
            _ => None,
        }
    }

    pub fn aircraft_address(&self) -> Option<u32> {
        match self.item(8) {
            Some(Cat048Item::AircraftAddress(address)) => Some(address.address),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test_acas;
#[cfg(test)]
mod test_record;
