use clap::Parser;
use cv_gen::{generate_pdf, GeneratorConfig, Locale, PDFError, ResumeData};
use std::fs;
use std::path::PathBuf;

/// Render a résumé described in JSON to a PDF
#[derive(Parser, Debug)]
#[command(name = "cv-gen", version)]
#[command(about = "Render a résumé described in JSON to a PDF")]
struct Args {
    /// Résumé data (JSON)
    resume: PathBuf,

    /// Generator configuration (JSON): locale, style, typeface, labels
    #[arg(long)]
    config: Option<PathBuf>,

    /// Language of section titles and labels; overrides the configuration
    #[arg(long)]
    locale: Option<Locale>,

    /// Where to write the PDF
    #[arg(short, long, conflicts_with = "output_dir")]
    output: Option<PathBuf>,

    /// Directory to write `CV_<Name>.pdf` into
    #[arg(long)]
    output_dir: Option<PathBuf>,
}

fn run(args: Args) -> Result<PathBuf, PDFError> {
    let mut config = match &args.config {
        Some(path) => GeneratorConfig::from_json_file(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(locale) = args.locale {
        config.locale = locale;
    }

    log::debug!("reading résumé from {}", args.resume.display());
    let resume = ResumeData::from_json(&fs::read_to_string(&args.resume)?)?;
    let pdf = generate_pdf(&resume, &config)?;

    let path = match (args.output, args.output_dir) {
        (Some(path), _) => path,
        (None, Some(dir)) => dir.join(&pdf.file_name),
        (None, None) => PathBuf::from(&pdf.file_name),
    };
    fs::write(&path, &pdf.bytes)?;
    Ok(path)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("cv_gen=info")).init();

    let args = Args::parse();
    match run(args) {
        Ok(path) => println!("{}", path.display()),
        Err(err) => {
            eprintln!("cv-gen: {err}");
            std::process::exit(1);
        }
    }
}
