use super::CommandHandler;
use crate::catalog::CatalogStore;
use crate::Result;

/// Handler for the `verify` command
pub struct VerifyCommand;

impl CommandHandler for VerifyCommand {
    fn execute(&self, store: &mut CatalogStore) -> Result<()> {
        println!("Verifying tool paths...");
        let (verified, failed) = store.verify_all()?;

        for tool in store.tools() {
            if !tool.verified {
                println!("  missing: {} ({})", tool.name, tool.path);
            }
        }
        println!("Verification complete: {verified} verified, {failed} failed");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "verify"
    }
}
