//! Student Records - keeps track of students, their course and their year of study.
//!
//! This program is free software: you can redistribute it and/or modify
//! it under the terms of the GNU General Public License as published by
//! the Free Software Foundation, either version 3 of the License, or
//! (at your option) any later version.
//!
//! This program is distributed in the hope that it will be useful,
//! but WITHOUT ANY WARRANTY; without even the implied warranty of
//! MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
//! GNU General Public License for more details.
//!
//! You should have received a copy of the GNU General Public License
//! along with this program. If not, see https://www.gnu.org/licenses.

use std::backtrace::Backtrace;
use std::io::{self, Write};
use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::{env, fs, panic};

use clap::{Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use student_records::Config;
use student_records::dashboard::{ApiClient, Dashboard, DashboardError, Draft};
use student_records::openapi;
use url::Url;

/// The API URL used by `dashboard` when neither `--api-url` nor `STUDENT_RECORDS_API_URL` is set.
const DEFAULT_API_URL: &str = "http://localhost:5000";

#[tokio::main]
async fn main() -> color_eyre::Result<()>
{
	color_eyre::install()?;

	let args = Args::parse();

	load_env_file(args.env_file.as_deref())?;

	let mut config = load_config(args.config.as_deref())?;

	if let Ok(database_url) = env::var("DATABASE_URL") {
		config.database.url = database_url
			.parse()
			.wrap_err("`DATABASE_URL` is not a valid URL")?;
	}

	match args.action.unwrap_or_default() {
		Action::Serve { ip, port } => {
			if let Some(ip) = ip {
				config.http.listen_on.set_ip(ip);
			}

			if let Some(port) = port {
				config.http.listen_on.set_port(port);
			}

			let _guard = student_records::logging::init(&config.tracing)
				.wrap_err("failed to initialize logging")?;

			install_panic_hook();

			student_records::run(config)
				.await
				.wrap_err("failed to run server")
		},
		Action::GenerateSpec => {
			let spec = openapi::Schema::json().wrap_err("failed to serialize OpenAPI document")?;

			writeln!(io::stdout(), "{spec}")?;

			Ok(())
		},
		Action::Dashboard { api_url, action } => {
			let _guard = student_records::logging::init(&config.tracing)
				.wrap_err("failed to initialize logging")?;

			let api_url = match api_url {
				Some(api_url) => api_url,
				None => env::var("STUDENT_RECORDS_API_URL")
					.as_deref()
					.unwrap_or(DEFAULT_API_URL)
					.parse()
					.wrap_err("`STUDENT_RECORDS_API_URL` is not a valid URL")?,
			};

			run_dashboard(api_url, action).await
		},
	}
}

/// Student Records
#[derive(Debug, Parser)]
#[command(version)]
struct Args
{
	/// Path to the configuration file.
	///
	/// Defaults to `./student-records.toml` if it exists.
	#[arg(long, global = true, value_name = "FILE")]
	config: Option<PathBuf>,

	/// Use a custom `.env` file.
	#[arg(long, global = true, value_name = "FILE")]
	env_file: Option<PathBuf>,

	/// What you want to do
	#[command(subcommand)]
	action: Option<Action>,
}

#[derive(Debug, Subcommand)]
enum Action
{
	/// Serve the API
	Serve
	{
		/// The IP address to listen on.
		#[arg(long)]
		ip: Option<IpAddr>,

		/// The port to listen on.
		#[arg(long)]
		port: Option<u16>,
	},

	/// Print the API's OpenAPI document as JSON.
	GenerateSpec,

	/// Show or modify the records of a running API.
	Dashboard
	{
		/// Where the API is hosted [default: $STUDENT_RECORDS_API_URL or http://localhost:5000]
		#[arg(long, value_name = "URL")]
		api_url: Option<Url>,

		#[command(subcommand)]
		action: DashboardAction,
	},
}

impl Default for Action
{
	fn default() -> Self
	{
		Self::Serve { ip: None, port: None }
	}
}

#[derive(Debug, Subcommand)]
enum DashboardAction
{
	/// Print the current records.
	Show,

	/// Add a new student.
	Add
	{
		#[arg(long)]
		name: String,

		#[arg(long)]
		course: String,

		#[arg(long, allow_hyphen_values = true)]
		year: String,
	},

	/// Delete a student.
	Delete
	{
		/// The student's ID.
		#[arg(allow_negative_numbers = true)]
		id: i64,
	},
}

fn load_env_file(path: Option<&Path>) -> color_eyre::Result<()>
{
	if let Some(path) = path {
		dotenvy::from_path(path).wrap_err_with(|| format!("failed to load {path:?}"))?;
		return Ok(());
	}

	match dotenvy::dotenv() {
		Ok(_) => Ok(()),
		Err(error) if error.not_found() => Ok(()),
		Err(error) => Err(error).wrap_err("failed to load `.env` file"),
	}
}

fn load_config(path: Option<&Path>) -> color_eyre::Result<Config>
{
	if let Some(path) = path {
		return Config::load_from_file(path).wrap_err_with(|| format!("failed to load {path:?}"));
	}

	if fs::exists(student_records::config::DEFAULT_PATH)? {
		return Config::load_from_file(student_records::config::DEFAULT_PATH)
			.wrap_err("failed to load default configuration file");
	}

	Ok(Config::default())
}

fn install_panic_hook()
{
	let old_panic_hook = panic::take_hook();

	panic::set_hook(Box::new(move |info| {
		tracing::error_span!("panic_hook").in_scope(|| {
			let backtrace = Backtrace::force_capture();
			tracing::error!(target: "student_records::panics", "{info}\n\nstack backtrace:\n{backtrace}");
		});

		old_panic_hook(info)
	}));
}

async fn run_dashboard(api_url: Url, action: DashboardAction) -> color_eyre::Result<()>
{
	let mut dashboard = Dashboard::new(ApiClient::new(api_url));

	match action {
		DashboardAction::Show => {
			dashboard.refresh().await.wrap_err("failed to load records")?;
		},
		DashboardAction::Add { name, course, year } => {
			*dashboard.draft_mut() = Draft::new(name, course, year);
			report(dashboard.submit().await, "failed to add student")?;
		},
		DashboardAction::Delete { id } => {
			report(dashboard.delete(id).await, "failed to delete student")?;
		},
	}

	write!(io::stdout(), "{}", dashboard.view())?;

	Ok(())
}

/// Attaches `context` to errors of the mutation itself, but not to a failed reload afterwards.
fn report(result: Result<(), DashboardError>, context: &'static str) -> color_eyre::Result<()>
{
	match result {
		Ok(()) => Ok(()),
		Err(error @ DashboardError::Refresh(_)) => Err(error.into()),
		Err(error) => Err(error).wrap_err(context),
	}
}
