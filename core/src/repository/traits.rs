use crate::model::export::ExportDocument;
use anyhow::Result;

pub trait ExportRepository {
    fn load(&self) -> Result<ExportDocument>;
}
