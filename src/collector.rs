use anyhow::Result;
use chrono::Utc;
use chrono_tz::Tz;
use tracing::warn;

use crate::client::SensorClient;
use crate::sensor::{Capability, Device, Reading};
use crate::store::Store;

/// Outcome of one pass over the device list.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub appended: usize,

    pub failed: usize,
}

/// One pass: fetch every device in list order, one at a time, and append
/// one row per successful device. A failed device is logged and skipped
/// without a partial row; a store failure aborts the run, since a dataset
/// that cannot be written invalidates its purpose.
pub async fn collect_once<C: SensorClient>(
    client: &C,
    store: &Store,
    devices: &[Device],
    timezone: Tz,
) -> Result<RunSummary> {
    let mut summary = RunSummary::default();

    for device in devices {
        let report = match client.fetch(&device.address).await {
            Ok(report) => report,
            Err(err) => {
                warn!("{err}");
                summary.failed += 1;
                continue;
            }
        };

        let timestamp = Utc::now().with_timezone(&timezone);

        let reported = Capability::from_reported_id(report.id);
        if let Some(expected) = device.expected
            && expected != reported
        {
            // The reported id stays authoritative; the hint only flags
            // drift between addresses and logical identities.
            warn!(
                "{} expected to be {} but reported id {} ({})",
                device.address,
                expected.as_str(),
                report.id,
                reported.as_str()
            );
        }

        let reading = match Reading::from_report(&report, &device.address, timestamp) {
            Ok(reading) => reading,
            Err(err) => {
                warn!("{err}");
                summary.failed += 1;
                continue;
            }
        };

        store.append(&reading).await?;
        summary.appended += 1;
    }

    Ok(summary)
}
