use std::{
	fs, //
	path::{Path, PathBuf},
	process::ExitCode,
};

use clap::{Arg, ArgAction, Command};

use kfile::{
	config::{self, Manifest, Overrides},
	resolve::resolve,
	BuildOptions, ProjectDescriptor,
};

const MANIFEST: &str = "manifest";
const SCRIPT: &str = "script";
const PLATFORM: &str = "platform";
const RENDERER: &str = "renderer";
const DIALOG: &str = "dialog";
const RESOLVE: &str = "resolve";
const FORMAT: &str = "format";
const OUTPUT: &str = "output";

fn command() -> Command {
	Command::new("kfile")
		.about("Builds the project descriptor for a native Kinc build")
		.arg(Arg::new(MANIFEST).short('m').long(MANIFEST).value_name("path").help("Read build inputs from a kfile.toml"))
		.arg(Arg::new(SCRIPT).short('s').long(SCRIPT).value_name("path").help("Evaluate a Starlark kfile script"))
		.arg(Arg::new(PLATFORM).short('p').long(PLATFORM).value_name("name").help("Target platform"))
		.arg(Arg::new(RENDERER).short('r').long(RENDERER).value_name("gpu|cpu").help("Renderer backend"))
		.arg(Arg::new(DIALOG).short('d').long(DIALOG).value_name("gtk|zenity").help("File dialog backend on linux"))
		.arg(Arg::new(RESOLVE).long(RESOLVE).value_name("source-dir").help("Also list the files the descriptor selects"))
		.arg(
			Arg::new(FORMAT)
				.short('f')
				.long(FORMAT)
				.value_parser(["toml", "json", "text"])
				.default_value("toml")
				.action(ArgAction::Set),
		)
		.arg(Arg::new(OUTPUT).short('o').long(OUTPUT).value_name("path").help("Write to a file instead of stdout"))
}

fn load_manifest(path: Option<&String>) -> Result<Manifest, anyhow::Error> {
	match path {
		Some(path) => config::read_manifest(Path::new(path)),
		None if Path::new(config::KFILE_TOML).is_file() => config::read_manifest(Path::new(config::KFILE_TOML)),
		None => Ok(Manifest::default()),
	}
}

fn render(descriptor: &ProjectDescriptor, format: &str) -> Result<String, anyhow::Error> {
	match format {
		"json" => descriptor.to_json(),
		"text" => Ok(descriptor.to_string() + "\n"),
		_ => descriptor.to_toml(),
	}
}

fn run(matches: &clap::ArgMatches) -> Result<(), anyhow::Error> {
	let manifest = load_manifest(matches.get_one::<String>(MANIFEST))?;
	let overrides = Overrides {
		platform: matches.get_one::<String>(PLATFORM).cloned(),
		renderer: matches.get_one::<String>(RENDERER).cloned(),
		dialog: matches.get_one::<String>(DIALOG).cloned(),
	};
	let options: BuildOptions = manifest.build_options(&overrides)?;

	let descriptor = match matches.get_one::<String>(SCRIPT) {
		Some(script) => kfile::parse_script(Path::new(script), &options)?,
		None => kfile::build_with(&options)?,
	};

	let format = matches.get_one::<String>(FORMAT).map_or("toml", |x| x.as_str());
	let mut out = render(&descriptor, format)?;

	if let Some(source_dir) = matches.get_one::<String>(RESOLVE) {
		let resolved = resolve(&descriptor, &PathBuf::from(source_dir))?;
		log::info!("resolved {} files", resolved.len());
		match format {
			"json" => out = serde_json::to_string_pretty(&serde_json::json!({ "project": descriptor, "files": resolved }))?,
			_ => {
				out += "\n";
				for src in resolved.iter() {
					out += &format!("# {}\n", src.name);
				}
			}
		}
	}

	match matches.get_one::<String>(OUTPUT) {
		Some(path) => match fs::write(path, out) {
			Ok(x) => x,
			Err(e) => return Err(anyhow::anyhow!("Error writing {}: {}", path, e)),
		},
		None => print!("{}", out),
	}
	Ok(())
}

fn main() -> ExitCode {
	env_logger::Builder::from_env(env_logger::Env::default().filter_or("KFILE_LOG", "off"))
		.format_timestamp(None)
		.init();

	let matches = command().get_matches();
	match run(&matches) {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			println!("Error: {}", e);
			ExitCode::FAILURE
		}
	}
}
