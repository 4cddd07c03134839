use log::{error, info};

use crate::{
    decode::decode,
    error::PipelineError,
    fetch::Fetcher,
    model::WeatherRecord,
    present::{DisplayProjection, project},
    sink::DisplaySink,
};

/// Fetch and decode one document. Stops at the first failing stage.
pub async fn run<F>(fetcher: &F, url: &str) -> Result<WeatherRecord, PipelineError>
where
    F: Fetcher + ?Sized,
{
    let bytes = fetcher.fetch(url).await?;
    let record = decode(&bytes)?;
    Ok(record)
}

/// Owns the current record and its projection, and drives the sink.
#[derive(Debug)]
pub struct WeatherController<F, S> {
    fetcher: F,
    source_url: String,
    sink: S,
    record: Option<WeatherRecord>,
    projection: Option<DisplayProjection>,
}

impl<F: Fetcher, S: DisplaySink> WeatherController<F, S> {
    pub fn new(fetcher: F, source_url: impl Into<String>, sink: S) -> Self {
        Self {
            fetcher,
            source_url: source_url.into(),
            sink,
            record: None,
            projection: None,
        }
    }

    /// Replace the current record, recompute the projection and publish it.
    pub fn set_record(&mut self, record: WeatherRecord) {
        let projection = project(&record);
        self.sink.publish(&projection);
        self.record = Some(record);
        self.projection = Some(projection);
    }

    /// One pipeline run.
    ///
    /// On failure the error is logged and returned; the previous record and
    /// projection are kept and nothing is published.
    pub async fn refresh(&mut self) -> Result<(), PipelineError> {
        match run(&self.fetcher, &self.source_url).await {
            Ok(record) => {
                info!("Weather for '{}' updated", record.location_name);
                self.set_record(record);
                Ok(())
            }
            Err(err) => {
                error!("Get weather error during {} stage: {err}", err.stage());
                Err(err)
            }
        }
    }

    pub fn record(&self) -> Option<&WeatherRecord> {
        self.record.as_ref()
    }

    pub fn projection(&self) -> Option<&DisplayProjection> {
        self.projection.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn source_url(&self) -> &str {
        &self.source_url
    }
}
