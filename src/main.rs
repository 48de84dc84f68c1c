mod config;
mod dirs;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use fixed_map::Set;
use lib::{
    Hepburn, Inflections, LanguageForm, Lexicon, MemoryLexicon, VerbClass, VerbEntry, VerbalForm,
};
use serde::Serialize;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::dirs::Dirs;

#[derive(Parser)]
#[command(about = "Conjugate Japanese verbs")]
struct Args {
    /// Verbs to conjugate, looked up in the lexicon. May be written in kanji,
    /// kana or romaji.
    #[arg(name = "query")]
    queries: Vec<String>,
    /// Kanji spelling of a verb to conjugate.
    #[arg(long)]
    kanji: Option<String>,
    /// Kana spelling of a verb to conjugate. Requires `--class`.
    #[arg(long)]
    kana: Option<String>,
    /// Class of the verb given through `--kana`, such as `v5k`.
    #[arg(long)]
    class: Option<String>,
    /// Lexicon used to resolve queries, in TOML or JSON format.
    #[arg(long)]
    lexicon: Option<PathBuf>,
    /// Only print the given verbal form. May be specified multiple times.
    #[arg(long = "form", name = "form")]
    forms: Vec<String>,
    /// List available verb classes and exit.
    #[arg(long)]
    list_classes: bool,
    /// List available verbal forms and exit.
    #[arg(long)]
    list_forms: bool,
    /// Print output as JSON.
    #[arg(long)]
    json: bool,
    /// Don't print romanized forms.
    #[arg(long)]
    no_romaji: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    entry: &'a VerbEntry,
    inflections: Inflections,
}

fn main() -> Result<()> {
    let filter = EnvFilter::builder().from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .finish()
        .try_init()?;

    let args = Args::parse();

    if args.list_classes {
        println!("Available `--class` arguments:");

        for class in VerbClass::VALUES {
            println!("{} - {} / {}", class.keyword(), class.variant(), class.help());
        }

        return Ok(());
    }

    if args.list_forms {
        println!("Available `--form` arguments:");

        for form in VerbalForm::ALL {
            println!("{} - {}", form.keyword(), form.title());
        }

        return Ok(());
    }

    let dirs = Dirs::open()?;
    let config = Config::load(&dirs)?;

    let mut forms = Set::new();

    if args.forms.is_empty() {
        for &form in &config.forms {
            forms.insert(form);
        }
    } else {
        for form in &args.forms {
            let form = VerbalForm::parse_keyword(form)
                .with_context(|| anyhow!("Invalid verbal form `{form}`, see `--list-forms`"))?;
            forms.insert(form);
        }
    }

    let mut entries = Vec::new();

    match (&args.kanji, &args.kana) {
        (kanji, Some(kana)) => {
            let class = args
                .class
                .as_deref()
                .context("`--class` is required when conjugating through `--kana`")?;

            let kanji = kanji.as_deref().unwrap_or_default();
            entries.push(VerbEntry::from_tag(kanji, kana.as_str(), class)?);
        }
        (Some(..), None) => {
            bail!("`--kanji` requires `--kana` and `--class`");
        }
        (None, None) => {}
    }

    if !args.queries.is_empty() {
        let path = args
            .lexicon
            .clone()
            .or_else(|| config.lexicon.clone())
            .unwrap_or_else(|| dirs.lexicon_path());

        let lexicon =
            MemoryLexicon::load(&path).with_context(|| anyhow!("{}", path.display()))?;

        for query in &args.queries {
            let found = lexicon.lookup(query);

            if found.is_empty() {
                tracing::warn!("No verbs matching `{query}`");
            }

            entries.extend(found.into_iter().cloned());
        }
    }

    if entries.is_empty() {
        if args.queries.is_empty() {
            bail!("Nothing to conjugate, pass a query or `--kana` and `--class`");
        }

        return Ok(());
    }

    let hepburn = Hepburn::traditional();
    let romaji = config.romaji && !args.no_romaji;

    let o = io::stdout();
    let mut o = o.lock();

    if args.json {
        let mut outputs = Vec::with_capacity(entries.len());

        for entry in &entries {
            let inflections = lib::inflect(entry, forms.iter(), &hepburn)?;
            outputs.push(Output { entry, inflections });
        }

        serde_json::to_writer_pretty(&mut o, &outputs)?;
        writeln!(o)?;
        return Ok(());
    }

    for (i, entry) in entries.iter().enumerate() {
        if i > 0 {
            writeln!(o)?;
        }

        let inflections = lib::inflect(entry, forms.iter(), &hepburn)?;
        print_entry(&mut o, entry, &inflections, romaji)?;
    }

    Ok(())
}

fn print_entry<O>(
    o: &mut O,
    entry: &VerbEntry,
    inflections: &Inflections,
    romaji: bool,
) -> Result<()>
where
    O: ?Sized + Write,
{
    let class = entry.class();

    if entry.kanji().is_empty() {
        writeln!(o, "{} [{class}] {}", entry.kana(), class.help())?;
    } else {
        writeln!(o, "{} ({}) [{class}] {}", entry.kanji(), entry.kana(), class.help())?;
    }

    for (form, cells) in inflections.iter() {
        writeln!(o, "  {} - {}", form.keyword(), form.title())?;

        for lang in LanguageForm::ALL {
            let Some(cell) = &cells[lang.index()] else {
                continue;
            };

            write!(o, "    {:<16}", lang.title())?;

            if cell.kanji == cell.kana {
                write!(o, "{}", cell.kana)?;
            } else {
                write!(o, "{} ({})", cell.kanji, cell.kana)?;
            }

            if romaji {
                write!(o, " {}", cell.romaji)?;
            }

            writeln!(o)?;
        }
    }

    Ok(())
}
