//! Interactive shell over the household calendar core.
//!
//! # Responsibility
//! - Act as a stateless presentation consumer of `kinboard_core`: every
//!   command maps onto one session operation, and the shell re-reads the
//!   visible list instead of caching anything.
//! - Keep output deterministic for quick local sanity checks.

use kinboard_core::{default_log_level, init_logging, EventDraft, PlannerSession};
use log::debug;
use std::collections::HashSet;
use std::io::{self, BufRead, Write};
use uuid::Uuid;

fn main() {
    init_logging_from_env();

    let mut session = PlannerSession::with_sample_events();
    println!(
        "kinboard {} - type `help` for commands",
        kinboard_core::core_version()
    );
    print_events(&session);

    let stdin = io::stdin();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(err) => {
                eprintln!("failed to read input: {err}");
                break;
            }
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        let (command, rest) = match input.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (input, ""),
        };

        match command {
            "list" | "ls" => print_events(&session),
            "add" => handle_add(&mut session, rest),
            "rm" | "delete" => handle_delete(&mut session, rest),
            "search" => {
                session.set_search_query(rest);
                print_events(&session);
            }
            "members" => {
                let members = parse_id_set(rest);
                let categories = session.filters().categories.clone();
                session.set_filters(members, categories);
                print_events(&session);
            }
            "categories" => {
                let categories = parse_id_set(rest);
                let members = session.filters().members.clone();
                session.set_filters(members, categories);
                print_events(&session);
            }
            "sort" => {
                session.toggle_sort_order();
                print_events(&session);
            }
            "help" => print_help(),
            "quit" | "exit" => break,
            other => {
                debug!("event=unknown_command module=cli status=ok command_len={}", other.len());
                println!("unknown command `{other}`; type `help` for commands");
            }
        }
    }
}

fn init_logging_from_env() {
    let Ok(log_dir) = std::env::var("KINBOARD_LOG_DIR") else {
        return;
    };
    let level = std::env::var("KINBOARD_LOG").unwrap_or_else(|_| default_log_level().to_string());
    if let Err(err) = init_logging(&level, &log_dir) {
        eprintln!("logging disabled: {err}");
    }
}

/// `add Title | Time | Date | Location | category | member,member`
///
/// Location and members may be left empty; trailing fields may be omitted.
fn handle_add(session: &mut PlannerSession, rest: &str) {
    let mut fields = rest.split('|').map(str::trim);
    let draft = EventDraft {
        title: fields.next().unwrap_or_default().to_string(),
        time: fields.next().unwrap_or_default().to_string(),
        date: fields.next().unwrap_or_default().to_string(),
        location: fields.next().unwrap_or_default().to_string(),
        category: fields.next().unwrap_or_default().to_string(),
        members: fields
            .next()
            .map(parse_member_list)
            .unwrap_or_default(),
    };

    match session.add_event(draft) {
        Ok(event) => {
            println!("added {} ({})", event.title, event.id);
            print_events(session);
        }
        Err(err) => println!("rejected: {err}"),
    }
}

/// Deletes by full id or by unambiguous id prefix over the collection.
fn handle_delete(session: &mut PlannerSession, rest: &str) {
    if rest.is_empty() {
        println!("usage: rm <id or id prefix>");
        return;
    }

    if let Ok(id) = Uuid::parse_str(rest) {
        session.delete_event(id);
        print_events(session);
        return;
    }

    let matches: Vec<Uuid> = session
        .events()
        .iter()
        .filter(|event| event.id.to_string().starts_with(rest))
        .map(|event| event.id)
        .collect();
    match matches.as_slice() {
        [] => println!("no event id starts with `{rest}`"),
        [id] => {
            session.delete_event(*id);
            print_events(session);
        }
        _ => println!("`{rest}` is ambiguous ({} matches)", matches.len()),
    }
}

fn parse_id_set(csv: &str) -> HashSet<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

/// Like [`parse_id_set`] but keeps the order the user typed, since event
/// member lists preserve insertion order.
fn parse_member_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}

fn print_events(session: &PlannerSession) {
    let visible = session.visible_events();
    let query = session.search_query();
    if query.is_empty() {
        println!("upcoming events ({}):", visible.len());
    } else {
        println!("results for \"{query}\" ({}):", visible.len());
    }

    for event in &visible {
        let short_id: String = event.id.to_string().chars().take(8).collect();
        let members = if event.members.is_empty() {
            "-".to_string()
        } else {
            event.members.join(",")
        };
        println!(
            "  [{short_id}] {} | {} {} | {} | {} | {}",
            event.title,
            event.date,
            event.time,
            if event.location.is_empty() { "-" } else { event.location.as_str() },
            event.category,
            members
        );
    }
}

fn print_help() {
    println!("commands:");
    println!("  list                      show visible events");
    println!("  add T | Time | Date | Loc | category | m1,m2");
    println!("  rm <id or prefix>         delete one event (no-op if missing)");
    println!("  search <text>             filter by title/location substring");
    println!("  members <m1,m2>           require at least one member (empty clears)");
    println!("  categories <c1,c2>        require category membership (empty clears)");
    println!("  sort                      toggle date-bucket order");
    println!("  quit");
}
