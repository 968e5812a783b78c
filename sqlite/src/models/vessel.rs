use chrono::{DateTime, Utc};
use portfeed_rs::ImoNumber;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Vessel {
    pub imo_number: i64,
    pub vessel_name: Option<String>,
    pub call_sign: Option<String>,
    pub mmsi_number: Option<i64>,
    pub flag: Option<String>,
    pub vessel_type: Option<String>,
    pub vessel_length: Option<f64>,
    pub vessel_breadth: Option<f64>,
    pub gross_tonnage: f64,
    pub net_tonnage: f64,
    pub deadweight: Option<f64>,
    pub estimated_dwt: i64,
    pub year_built: Option<i64>,
    pub last_updated: DateTime<Utc>,
}

impl From<Vessel> for harbor_core::Vessel {
    fn from(v: Vessel) -> Self {
        harbor_core::Vessel {
            imo_number: ImoNumber::new(v.imo_number),
            vessel_name: v.vessel_name,
            call_sign: v.call_sign,
            mmsi_number: v.mmsi_number,
            flag: v.flag,
            vessel_type: v.vessel_type,
            vessel_length: v.vessel_length,
            vessel_breadth: v.vessel_breadth,
            gross_tonnage: v.gross_tonnage,
            net_tonnage: v.net_tonnage,
            deadweight: v.deadweight,
            estimated_dwt: v.estimated_dwt,
            year_built: v.year_built,
            last_updated: v.last_updated,
        }
    }
}
