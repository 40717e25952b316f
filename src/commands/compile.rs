//! Implementation of the `manda compile` command.

use crate::cli::CompileArgs;
use crate::compile::{compile_agents, write_compiled};
use crate::context::ModuleContext;
use crate::error::{MandaError, Result};
use crate::report::print_report;

/// Execute the `manda compile` command.
pub fn cmd_compile(ctx: &ModuleContext, args: CompileArgs) -> Result<()> {
    println!("Agent Compilation Check");
    println!("Module root: {}", ctx.module_root.display());

    let outcome = compile_agents(ctx);

    if !outcome.agents.is_empty() {
        println!();
        println!("Compiled agents:");
        for agent in &outcome.agents {
            println!(
                "  {} [{}] {} - {} chars",
                agent.code,
                agent.agent_type,
                agent.name,
                agent.markdown_length()
            );
        }
    }

    print_report("AGENT COMPILATION RESULTS", &outcome.report);

    if !outcome.success() {
        return Err(MandaError::ValidationError(format!(
            "agent compilation finished with {} error(s)",
            outcome.report.errors.len()
        )));
    }

    if let Some(out_dir) = args.output_dir {
        let written = write_compiled(&outcome.agents, &out_dir)?;
        println!();
        println!(
            "Wrote {} compiled agent(s) to {}",
            written.len(),
            out_dir.display()
        );
    }

    println!();
    println!("All agents compiled successfully.");
    Ok(())
}
