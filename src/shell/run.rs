//! Line-driven onboarding session.

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{info, info_span, Instrument};
use wl_app::usecases::{OnboardingController, PageStatus};

/// Drive the onboarding page from line input until it leaves.
///
/// Each line edits the company name and submits; an empty line submits the
/// current value (the pre-filled suggestion the first time). End of input
/// tears the page down.
pub async fn run_onboarding<R>(
    controller: &OnboardingController,
    input: R,
) -> anyhow::Result<PageStatus>
where
    R: AsyncBufRead + Unpin,
{
    let span = info_span!("shell.run_onboarding");
    async {
        let status = controller.activate().await?;
        if status != PageStatus::Active {
            return Ok(status);
        }

        let mut lines = input.lines();
        loop {
            let Some(line) = lines.next_line().await? else {
                info!("input closed, leaving onboarding page");
                controller.teardown().await;
                return Ok(controller.status().await);
            };

            let line = line.trim_end_matches('\r');
            if !line.is_empty() {
                controller.set_company_name(line).await?;
            }
            controller.submit().await?;

            let status = controller.status().await;
            if status != PageStatus::Active {
                return Ok(status);
            }
        }
    }
    .instrument(span)
    .await
}
