use pasmc_translator::{translate_source, TranslatorConfig};
use rustyline::{error::ReadlineError, Editor, Result};

fn main() -> Result<()> {
    let mut rl = Editor::<()>::new()?;
    if rl.load_history("history.txt").is_err() {
        println!("No previous REPL history");
    }

    loop {
        let readline = rl.readline("pasm> ");
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                match translate_source(&line, TranslatorConfig::default()) {
                    Ok(translation) => {
                        print!("{}", translation.instructions);
                        for diagnostic in &translation.diagnostics {
                            eprintln!("{}", diagnostic.render(&line));
                        }
                    }
                    Err(e) => println!("Got error while translating: {e}"),
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    rl.save_history("history.txt")
}
