extern crate clap;
extern crate tokio;

use std::sync::Arc;

use clap::Parser;
use gdlemma::{frequency::TermCounter, normalizer::Normalizer, Lemmatizer};
use gdlemma_repo::{
    batch::lemmatize_parallel,
    cli::{Cli, Command, FirstWords, Frequency, Lemmatize, Tables},
    error::{Error, IoError},
    normalizer::NormalizerPipeline,
    read::{load_irregulars, load_rules, load_stopwords, read_input, write_output},
    report,
    tokenizer::{FirstWord, TextTokenizer, Tokenizer},
};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Lemmatize(args) => lemmatize(args).await,
        Command::Frequency(args) => frequency(args).await,
        Command::FirstWords(args) => first_words(args).await,
    }
}

async fn lemmatizer(tables: &Tables) -> Result<Lemmatizer, Error> {
    let (irregulars, rules) = tokio::try_join!(
        load_irregulars(tables.irregulars.as_deref()),
        load_rules(tables.rules.as_deref()),
    )?;

    debug!(policy = ?tables.policy(), "prosthetic policy");

    Ok(Lemmatizer::with_normalizer(
        Arc::new(irregulars),
        Arc::new(rules),
        Normalizer::with_policy(tables.policy()),
    ))
}

async fn lemmatize(args: Lemmatize) -> Result<(), Error> {
    let lemmatizer = lemmatizer(&args.tables).await?;
    let text = read_input(&args.input).await?;

    let tokens = Tokenizer::from(args.tokenizer).tokenize(&text).into_strings();
    let total = tokens.len();

    let pairs = tokio::task::spawn_blocking(move || {
        lemmatize_parallel(&lemmatizer, tokens, args.threads)
    })
    .await
    .map_err(|error| Error::Worker(error.to_string()))?;

    info!(tokens = total, "lemmatized");
    print(&report::lemmas(&pairs, args.format)?).await
}

async fn frequency(args: Frequency) -> Result<(), Error> {
    let stopwords = load_stopwords(args.stopwords.as_deref()).await?;
    let text = read_input(&args.input).await?;

    let replacer = if args.lemmatize {
        Some(lemmatizer(&args.tables).await?)
    } else {
        None
    };

    let mut pipeline = NormalizerPipeline::frequency(stopwords, replacer);

    let mut tokens = Tokenizer::from(args.tokenizer).tokenize(&text);
    pipeline.run(&mut tokens);

    let mut counter = TermCounter::new();
    counter.extend(tokens);
    info!(total = counter.total(), distinct = counter.len(), "counted");

    print(&report::frequencies(&counter.most_common(args.top), args.format)?).await
}

async fn first_words(args: FirstWords) -> Result<(), Error> {
    let text = read_input(&args.input).await?;
    let tokens = FirstWord::new().tokenize(&text);

    let mut out = String::with_capacity(text.len() / 4);
    tokens.iter().for_each(|token| {
        out.push_str(token);
        out.push('\n');
    });

    write_output(&args.output, &out).await?;
    info!(words = tokens.count(), output = %args.output.display(), "wrote first words");

    Ok(())
}

async fn print(out: &str) -> Result<(), Error> {
    let mut stdout = tokio::io::stdout();

    let write = async {
        stdout.write_all(out.as_bytes()).await?;
        stdout.flush().await
    };

    write
        .await
        .map_err(|error| IoError::Writer(error.kind()).into())
}
