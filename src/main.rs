use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::PathBuf,
    time::Instant,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use pasmc_lexer::Scanner;
use pasmc_translator::{LabelStyle, Recovery, Translator, TranslatorConfig};

/// Translated when no source file is given.
const DEMO_PROGRAM: &str = "
    int x = 10;
    int y = 20;
    if (x > y) {
        print(x);
    } else {
        print(y);
    }
    while (x > 0) {
        x = x - 1;
    }
";

#[derive(Parser, Debug)]
#[command(about = "Translates a tiny imperative language into pseudo-assembly")]
struct Args {
    /// Source file; the built-in demo program is used when omitted.
    source: Option<PathBuf>,

    /// Where to write the instructions.
    #[arg(short, long, default_value = "output.asm")]
    output: PathBuf,

    /// Jump target naming.
    #[arg(long, value_enum, default_value_t = LabelStyle::Unique)]
    labels: LabelStyle,

    /// What to do after a syntax error.
    #[arg(long, value_enum, default_value_t = Recovery::Synchronize)]
    recovery: Recovery,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let source = match &args.source {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => DEMO_PROGRAM.to_owned(),
    };

    let config = TranslatorConfig {
        labels: args.labels,
        recovery: args.recovery,
    };
    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;

    let time = Instant::now();
    let emitted = translate(&source, BufWriter::new(file), config)?;
    info!("translation took {:?}", time.elapsed());

    println!(
        "Translation completed: {emitted} instructions written to {}",
        args.output.display()
    );
    Ok(())
}

/// Translates `source` into `sink`, printing diagnostics to stderr.
/// Returns the number of instructions written.
fn translate<W: Write>(source: &str, sink: W, config: TranslatorConfig) -> Result<usize> {
    let mut translator = Translator::with_config(Scanner::new(source), sink, config);
    translator.translate()?;

    for diagnostic in translator.diagnostics() {
        eprintln!("{}", diagnostic.render(source));
    }
    Ok(translator.emitted())
}

#[cfg(test)]
mod tests {
    use pasmc_translator::TranslatorConfig;
    use pretty_assertions::assert_eq;

    use super::{translate, DEMO_PROGRAM};

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn demo_program_legacy_output() {
        init_logging();
        let mut out = Vec::new();
        let emitted = translate(DEMO_PROGRAM, &mut out, TranslatorConfig::legacy()).unwrap();

        let expected = "\
load 10 into eax
mov x, eax
load 20 into eax
mov y, eax
load x into eax
compare eax with y
if eax != 0 jump label
load x into eax
print eax
label:
load y into eax
print eax
label:
load x into eax
compare eax with 0
if eax == 0 jump end_label
load x into eax
subtract eax with 1
mov x, eax
jump label
end_label:
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
        assert_eq!(emitted, 21);
    }

    #[test]
    fn demo_program_unique_labels_do_not_collide() {
        init_logging();
        let mut out = Vec::new();
        translate(DEMO_PROGRAM, &mut out, TranslatorConfig::default()).unwrap();
        let text = String::from_utf8(out).unwrap();

        let labels: Vec<&str> = text.lines().filter(|l| l.ends_with(':')).collect();
        assert_eq!(labels, vec!["label_1:", "label_2:", "end_label_2:"]);
    }
}
