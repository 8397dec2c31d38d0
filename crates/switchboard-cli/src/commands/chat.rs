use console::style;
use std::io::Write;
use tokio::io::AsyncBufReadExt;

use switchboard_config::SwitchboardConfig;
use switchboard_core::{AgentResponse, Result};
use switchboard_runtime::{Conversation, build_agent};

fn print_response(response: &AgentResponse) {
    println!(
        "{} {}",
        style(format!("assistant [{}]>", response.action)).green(),
        response.content
    );
}

pub(super) async fn cmd_chat(config: &SwitchboardConfig) -> Result<()> {
    let agent = build_agent(config)?;

    println!("Switchboard interactive chat");
    println!("   Ask for a joke or a recipe. Type 'exit' or 'quit' to leave.");
    println!();

    let stdin = tokio::io::stdin();
    let mut lines = tokio::io::BufReader::new(stdin).lines();
    let mut conversation = Conversation::new();

    loop {
        eprint!("{} ", style("you>").cyan());
        std::io::stderr().flush().ok();

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break, // EOF
            Err(_) => break,
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        match conversation.send(&agent, trimmed).await {
            Ok(response) => print_response(&response),
            Err(e) => eprintln!("{} {e}", style("error:").red().bold()),
        }
    }
    Ok(())
}

pub(super) async fn cmd_ask(config: &SwitchboardConfig, message: &str, json: bool) -> Result<()> {
    let agent = build_agent(config)?;
    let response = agent.respond(&[], message.trim()).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response);
    }
    Ok(())
}
