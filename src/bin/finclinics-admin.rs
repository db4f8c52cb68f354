#![cfg(feature = "admin-cli")]

//! Console for the FinanceClinics admin area
//!
//! Covers the day-to-day admin flows: signing in, working the lead queue,
//! adjusting site settings, and moving MIS report files in and out. The
//! session is kept in a file so it survives between invocations.

use clap::{App, Arg};
use std::sync::Arc;

use financeclinics_client::config::{ClientOptions, API_URL_ENV, DEFAULT_API_URL};
use financeclinics_client::leads::LeadStatus;
use financeclinics_client::mis::ExportFormat;
use financeclinics_client::routing::RoutePath;
use financeclinics_client::store::FileStore;
use financeclinics_client::FinanceClinics;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = App::new("finclinics-admin")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Console for the FinanceClinics admin area")
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .value_name("URL")
                .help("API base URL (defaults to FINANCECLINICS_API_URL)")
                .takes_value(true)
                .global(true),
        )
        .arg(
            Arg::new("session-file")
                .long("session-file")
                .value_name("FILE")
                .default_value(".finclinics-session.json")
                .help("Where the signed-in session is kept")
                .takes_value(true)
                .global(true),
        )
        .subcommand(
            App::new("login")
                .about("Sign in and persist the session")
                .arg(Arg::new("email").required(true))
                .arg(Arg::new("password").required(true)),
        )
        .subcommand(App::new("logout").about("Sign out"))
        .subcommand(App::new("whoami").about("Show the signed-in user"))
        .subcommand(
            App::new("leads")
                .about("Work the lead queue")
                .subcommand(
                    App::new("list")
                        .arg(Arg::new("page").long("page").default_value("1").takes_value(true))
                        .arg(Arg::new("status").long("status").takes_value(true)),
                )
                .subcommand(
                    App::new("status")
                        .about("Move a lead to a new status")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("status").required(true)),
                )
                .subcommand(
                    App::new("export")
                        .about("Export leads as CSV")
                        .arg(Arg::new("status").long("status").takes_value(true))
                        .arg(Arg::new("out").long("out").required(true).takes_value(true)),
                ),
        )
        .subcommand(
            App::new("settings")
                .about("Inspect and update site settings")
                .subcommand(App::new("list"))
                .subcommand(
                    App::new("set")
                        .arg(Arg::new("key").required(true))
                        .arg(Arg::new("value").required(true)),
                ),
        )
        .subcommand(
            App::new("mis")
                .about("MIS report templates")
                .subcommand(App::new("list"))
                .subcommand(
                    App::new("import")
                        .about("Upload a report file into a template")
                        .arg(Arg::new("id").required(true))
                        .arg(Arg::new("file").required(true))
                        .arg(Arg::new("format").long("format").takes_value(true)),
                )
                .subcommand(
                    App::new("export")
                        .about("Download a template's rows")
                        .arg(Arg::new("id").required(true))
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .takes_value(true),
                        )
                        .arg(Arg::new("out").long("out").required(true).takes_value(true)),
                ),
        )
        .get_matches();

    let api_url = matches
        .value_of("api-url")
        .map(str::to_string)
        .or_else(|| std::env::var(API_URL_ENV).ok())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let session_file = matches.value_of("session-file").unwrap_or_default();

    // The console always operates from inside the admin area, so a rejected
    // token drops the session file and leaves us on the login page.
    let client = FinanceClinics::new_with_parts(
        &api_url,
        ClientOptions::default(),
        Arc::new(FileStore::open(session_file)),
        Arc::new(RoutePath::new("/admin")),
    );

    match matches.subcommand() {
        Some(("login", sub)) => {
            let email = sub.value_of("email").unwrap_or_default();
            let password = sub.value_of("password").unwrap_or_default();
            let user = client.auth().login(email, password).await?;
            println!("signed in as {} ({})", user.name, user.role);
        }
        Some(("logout", _)) => {
            client.auth().logout().await;
            println!("signed out");
        }
        Some(("whoami", _)) => {
            client.auth().initialize().await;
            match client.auth().current_user() {
                Some(user) => println!("{} <{}> role={}", user.name, user.email, user.role),
                None => println!("not signed in"),
            }
        }
        Some(("leads", sub)) => {
            client.auth().initialize().await;
            match sub.subcommand() {
                Some(("list", args)) => {
                    let page = args.value_of("page").unwrap_or("1").parse()?;
                    let status = args.value_of("status").map(str::parse).transpose()?;
                    for lead in client.leads().admin_list(page, status).await? {
                        println!(
                            "#{:<5} {:<12} {:<30} {}",
                            lead.id, lead.status, lead.email, lead.name
                        );
                    }
                }
                Some(("status", args)) => {
                    let id = args.value_of("id").unwrap_or_default().parse()?;
                    let status: LeadStatus = args.value_of("status").unwrap_or_default().parse()?;
                    let lead = client.leads().update_status(id, status).await?;
                    println!("lead #{} is now {}", lead.id, lead.status);
                }
                Some(("export", args)) => {
                    let status = args.value_of("status").map(str::parse).transpose()?;
                    let out = args.value_of("out").unwrap_or_default();
                    let bytes = client.leads().export_csv(status).await?;
                    std::fs::write(out, &bytes)?;
                    println!("wrote {} bytes to {}", bytes.len(), out);
                }
                _ => eprintln!("see `finclinics-admin leads --help`"),
            }
        }
        Some(("settings", sub)) => {
            client.auth().initialize().await;
            match sub.subcommand() {
                Some(("list", _)) => {
                    for setting in client.settings().admin_all().await? {
                        println!(
                            "{:<30} = {}",
                            setting.key,
                            setting.value.unwrap_or_default()
                        );
                    }
                }
                Some(("set", args)) => {
                    let key = args.value_of("key").unwrap_or_default();
                    let value = args.value_of("value").unwrap_or_default();
                    client.settings().update(key, value).await?;
                    println!("{} updated", key);
                }
                _ => eprintln!("see `finclinics-admin settings --help`"),
            }
        }
        Some(("mis", sub)) => {
            client.auth().initialize().await;
            match sub.subcommand() {
                Some(("list", _)) => {
                    for template in client.mis().templates().await? {
                        let columns: Vec<&str> =
                            template.columns.iter().map(|c| c.key.as_str()).collect();
                        println!("#{:<5} {:<30} [{}]", template.id, template.name, columns.join(", "));
                    }
                }
                Some(("import", args)) => {
                    let id = args.value_of("id").unwrap_or_default().parse()?;
                    let path = args.value_of("file").unwrap_or_default();
                    let format = args.value_of("format").map(str::parse).transpose()?;
                    let bytes = std::fs::read(path)?;
                    let file_name = std::path::Path::new(path)
                        .file_name()
                        .map(|name| name.to_string_lossy().to_string())
                        .unwrap_or_else(|| "upload".to_string());
                    let imported = client.mis().import(id, &file_name, bytes, format).await?;
                    println!("imported {} rows", imported);
                }
                Some(("export", args)) => {
                    let id = args.value_of("id").unwrap_or_default().parse()?;
                    let format: ExportFormat =
                        args.value_of("format").unwrap_or("csv").parse()?;
                    let out = args.value_of("out").unwrap_or_default();
                    let bytes = client.mis().export(id, format).await?;
                    std::fs::write(out, &bytes)?;
                    println!("wrote {} bytes to {}", bytes.len(), out);
                }
                _ => eprintln!("see `finclinics-admin mis --help`"),
            }
        }
        _ => eprintln!("see `finclinics-admin --help`"),
    }

    Ok(())
}
