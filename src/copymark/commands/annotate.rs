use crate::commands::CmdResult;
use crate::config::Config;
use crate::error::Result;
use crate::notice;

use super::check;

/// Prepends the configured notice to every candidate, in scan order.
///
/// The first failure aborts the remaining batch; files already rewritten
/// stay rewritten. A successful run carries no messages (the CLI is silent
/// on success), only the list of updated paths.
pub fn run(config: &Config) -> Result<CmdResult> {
    let missing = check::candidates(config)?;
    for path in &missing {
        notice::prepend_notice(path, &config.notice)?;
    }
    Ok(CmdResult::default().with_candidates(missing))
}
