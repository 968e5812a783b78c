use strum::EnumIter;

/// Multiplier applied to gross tonnage for vessel types without a dedicated
/// entry in the estimation table.
pub const DEFAULT_DWT_MULTIPLIER: f64 = 1.5;

/// The known vessel type codes used by the feed.
///
/// The set spans cargo, tanker, passenger, service and support categories.
/// Codes outside this set are never rejected; they pass through the
/// canonical records verbatim and estimation falls back to
/// [`DEFAULT_DWT_MULTIPLIER`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter)]
pub enum VesselType {
    BulkCarrier,
    ChemicalCarrier,
    ContainerShip,
    GeneralCargo,
    RoRoCargo,
    OilTanker,
    GasTanker,
    PassengerShip,
    Ferry,
    ServiceVessel,
    Tug,
    Barge,
    FishingVessel,
    Dredger,
    OffshoreSupport,
    Yacht,
}

impl VesselType {
    pub fn from_code(code: &str) -> Option<VesselType> {
        match code.trim().to_ascii_uppercase().as_str() {
            "BC" => Some(VesselType::BulkCarrier),
            "CC" => Some(VesselType::ChemicalCarrier),
            "CT" => Some(VesselType::ContainerShip),
            "GC" => Some(VesselType::GeneralCargo),
            "RO" => Some(VesselType::RoRoCargo),
            "OT" => Some(VesselType::OilTanker),
            "GT" => Some(VesselType::GasTanker),
            "PS" => Some(VesselType::PassengerShip),
            "FY" => Some(VesselType::Ferry),
            "SV" => Some(VesselType::ServiceVessel),
            "TU" => Some(VesselType::Tug),
            "BG" => Some(VesselType::Barge),
            "FV" => Some(VesselType::FishingVessel),
            "DR" => Some(VesselType::Dredger),
            "OS" => Some(VesselType::OffshoreSupport),
            "YT" => Some(VesselType::Yacht),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            VesselType::BulkCarrier => "BC",
            VesselType::ChemicalCarrier => "CC",
            VesselType::ContainerShip => "CT",
            VesselType::GeneralCargo => "GC",
            VesselType::RoRoCargo => "RO",
            VesselType::OilTanker => "OT",
            VesselType::GasTanker => "GT",
            VesselType::PassengerShip => "PS",
            VesselType::Ferry => "FY",
            VesselType::ServiceVessel => "SV",
            VesselType::Tug => "TU",
            VesselType::Barge => "BG",
            VesselType::FishingVessel => "FV",
            VesselType::Dredger => "DR",
            VesselType::OffshoreSupport => "OS",
            VesselType::Yacht => "YT",
        }
    }

    /// Returns the display name of the vessel type.
    pub fn name(&self) -> &'static str {
        match self {
            VesselType::BulkCarrier => "Bulk Carrier",
            VesselType::ChemicalCarrier => "Chemical Carrier",
            VesselType::ContainerShip => "Container Ship",
            VesselType::GeneralCargo => "General Cargo",
            VesselType::RoRoCargo => "Ro-Ro Cargo",
            VesselType::OilTanker => "Oil Tanker",
            VesselType::GasTanker => "Gas Tanker",
            VesselType::PassengerShip => "Passenger Ship",
            VesselType::Ferry => "Ferry",
            VesselType::ServiceVessel => "Service Vessel",
            VesselType::Tug => "Tug",
            VesselType::Barge => "Barge",
            VesselType::FishingVessel => "Fishing Vessel",
            VesselType::Dredger => "Dredger",
            VesselType::OffshoreSupport => "Offshore Support Vessel",
            VesselType::Yacht => "Yacht",
        }
    }

    /// Deadweight estimation multiplier. Types without a dedicated
    /// coefficient use [`DEFAULT_DWT_MULTIPLIER`].
    pub fn dwt_multiplier(&self) -> f64 {
        match self {
            VesselType::BulkCarrier => 1.7,
            VesselType::OilTanker => 1.8,
            VesselType::GasTanker => 1.5,
            VesselType::ChemicalCarrier => 1.4,
            VesselType::ContainerShip => 0.9,
            VesselType::GeneralCargo => 1.3,
            VesselType::RoRoCargo => 0.7,
            VesselType::ServiceVessel => 0.5,
            _ => DEFAULT_DWT_MULTIPLIER,
        }
    }
}
