//! # CLI Layer
//!
//! The interactive menu. This is the only code that reads stdin, writes
//! stdout, or clears the screen; everything it shows comes from a
//! `CmdResult` returned by [`StockApi`].
//!
//! One pass of the loop:
//! 1. Clear the screen (only when stdout is a terminal)
//! 2. Print the heading, the product list and any pending messages
//! 3. Read a menu choice and dispatch it
//! 4. Wait for Enter
//!
//! Saving ends the session. Running out of input ends it without saving.

use super::render::{print_messages, render_detail, render_product_list};
use super::setup::Cli;
use clap::Parser;
use console::Term;
use directories::ProjectDirs;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use stockroom::api::StockApi;
use stockroom::commands::{CmdMessage, CmdResult, ProductDraft};
use stockroom::config::{CurrencyFormat, StockConfig};
use stockroom::error::{Result, StockError};
use stockroom::logging;
use stockroom::store::fs::CsvStore;
use stockroom::store::CatalogStore;

const HEADING: &str = "Webbshop Lagerhantering";
const MENU: &str = "Alternativ: (V)isa, (T)a bort, (L)ägga till, (K)ontrollera, (S)para & Avsluta";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = match cli.config_dir.clone().or_else(default_config_dir) {
        Some(dir) => StockConfig::load(dir)?,
        None => StockConfig::default(),
    };
    let catalog_path = config.catalog_path(cli.file.as_deref());
    tracing::debug!(path = %catalog_path.display(), "using catalog");

    let (api, opened) = StockApi::open(CsvStore::new(catalog_path))?;

    let term = Term::stdout();
    let stdin = io::stdin();
    let mut session = Session {
        api,
        currency: config.currency,
        input: stdin.lock(),
        out: io::stdout(),
        term: term.is_term().then_some(term),
        pending: opened.messages,
    };
    session.run()
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("se", "stockroom", "stockroom").map(|dirs| dirs.config_dir().to_path_buf())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    View,
    Remove,
    Add,
    Check,
    Save,
    Unknown,
}

impl MenuChoice {
    fn parse(input: &str) -> Self {
        match input.trim().to_uppercase().as_str() {
            "V" => MenuChoice::View,
            "T" => MenuChoice::Remove,
            "L" => MenuChoice::Add,
            "K" => MenuChoice::Check,
            "S" => MenuChoice::Save,
            _ => MenuChoice::Unknown,
        }
    }
}

enum Flow {
    Continue,
    Quit,
}

struct Session<S: CatalogStore, R: BufRead, W: Write> {
    api: StockApi<S>,
    currency: CurrencyFormat,
    input: R,
    out: W,
    term: Option<Term>,
    pending: Vec<CmdMessage>,
}

impl<S: CatalogStore, R: BufRead, W: Write> Session<S, R, W> {
    fn run(&mut self) -> Result<()> {
        loop {
            self.show_overview()?;

            let Some(choice) = self.prompt("Vad vill du göra? ")? else {
                return self.end_of_input();
            };

            let flow = match MenuChoice::parse(&choice) {
                MenuChoice::View => self.handle_view()?,
                MenuChoice::Remove => self.handle_remove()?,
                MenuChoice::Add => self.handle_add()?,
                MenuChoice::Check => {
                    let result = self.api.doctor();
                    self.print_result(&result)?;
                    Flow::Continue
                }
                MenuChoice::Save => self.handle_save()?,
                MenuChoice::Unknown => {
                    self.print(&[CmdMessage::error("Ogiltigt val, försök igen.")])?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Quit => return Ok(()),
                Flow::Continue => {
                    if self.prompt("\nTryck Enter för att fortsätta")?.is_none() {
                        return self.end_of_input();
                    }
                }
            }
        }
    }

    fn show_overview(&mut self) -> Result<()> {
        if let Some(term) = &self.term {
            term.clear_screen()?;
        }
        writeln!(self.out, "{}", HEADING)?;
        let listed = self.api.list();
        if !listed.listed_products.is_empty() {
            writeln!(
                self.out,
                "{}",
                render_product_list(&listed.listed_products, &self.currency)
            )?;
        }
        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            writeln!(self.out)?;
            self.print(&pending)?;
        }
        writeln!(self.out, "\n{}", MENU)?;
        Ok(())
    }

    fn handle_view(&mut self) -> Result<Flow> {
        let Some(handle) = self.prompt("Ange produktens ID: ")? else {
            return self.end_of_input().map(|_| Flow::Quit);
        };
        let result = self.api.view(&handle);
        writeln!(self.out)?;
        for dp in &result.listed_products {
            writeln!(self.out, "{}", render_detail(dp, &self.currency))?;
        }
        self.print_result(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_remove(&mut self) -> Result<Flow> {
        let Some(handle) = self.prompt("Ange produktens ID att ta bort: ")? else {
            return self.end_of_input().map(|_| Flow::Quit);
        };
        let result = self.api.remove(&handle);
        writeln!(self.out)?;
        self.print_result(&result)?;
        Ok(Flow::Continue)
    }

    fn handle_add(&mut self) -> Result<Flow> {
        let prompts = [
            "Ange produktens namn: ",
            "Ange produktbeskrivning: ",
            "Ange produktens pris: ",
            "Ange antal i lager: ",
        ];
        let mut answers = Vec::with_capacity(prompts.len());
        for prompt in prompts {
            match self.prompt(prompt)? {
                Some(answer) => answers.push(answer),
                None => return self.end_of_input().map(|_| Flow::Quit),
            }
        }
        let [name, desc, price, quantity]: [String; 4] = answers
            .try_into()
            .map_err(|_| StockError::InvalidInput("incomplete product".into()))?;

        match self.api.add(&ProductDraft::new(name, desc, price, quantity)) {
            Ok(result) => self.print_result(&result)?,
            Err(StockError::InvalidInput(detail)) => {
                tracing::debug!(%detail, "rejected product input");
                self.print(&[CmdMessage::error("Felaktig inmatning. Försök igen.")])?;
            }
            Err(e) => return Err(e),
        }
        Ok(Flow::Continue)
    }

    fn handle_save(&mut self) -> Result<Flow> {
        let result = self.api.save()?;
        writeln!(self.out)?;
        self.print_result(&result)?;
        writeln!(self.out, "Programmet avslutas.")?;
        Ok(Flow::Quit)
    }

    fn end_of_input(&mut self) -> Result<()> {
        tracing::warn!("input closed before save");
        writeln!(self.out)?;
        self.print(&[CmdMessage::warning(
            "Indata tog slut. Avslutar utan att spara.",
        )])
    }

    /// `None` once input is exhausted.
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.out, "{}", text)?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_result(&mut self, result: &CmdResult) -> Result<()> {
        self.print(&result.messages)
    }

    fn print(&mut self, messages: &[CmdMessage]) -> Result<()> {
        print_messages(&mut self.out, messages)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use stockroom::model::Product;
    use stockroom::store::memory::InMemoryStore;

    fn session(
        store: InMemoryStore,
        script: &str,
    ) -> Session<InMemoryStore, Cursor<Vec<u8>>, Vec<u8>> {
        let (api, opened) = StockApi::open(store).unwrap();
        Session {
            api,
            currency: CurrencyFormat::swedish(),
            input: Cursor::new(script.as_bytes().to_vec()),
            out: Vec::new(),
            term: None,
            pending: opened.messages,
        }
    }

    fn cable_store() -> InMemoryStore {
        InMemoryStore::with_products(vec![
            Product::new("Cable".into(), "USB-C".into(), 9.99, 5).with_id("a"),
        ])
    }

    fn output(s: &Session<InMemoryStore, Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8(s.out.clone()).unwrap()
    }

    #[test]
    fn menu_choice_parsing() {
        assert_eq!(MenuChoice::parse("v"), MenuChoice::View);
        assert_eq!(MenuChoice::parse(" T "), MenuChoice::Remove);
        assert_eq!(MenuChoice::parse("l"), MenuChoice::Add);
        assert_eq!(MenuChoice::parse("k"), MenuChoice::Check);
        assert_eq!(MenuChoice::parse("S"), MenuChoice::Save);
        assert_eq!(MenuChoice::parse("x"), MenuChoice::Unknown);
        assert_eq!(MenuChoice::parse(""), MenuChoice::Unknown);
    }

    #[test]
    fn lists_then_saves() {
        let mut s = session(cable_store(), "S\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("1) (#1) Cable – 9,99 kr (5 i lager)"));
        assert!(out.contains("Ändringar har sparats."));
        assert!(out.contains("Programmet avslutas."));
        assert_eq!(s.api.store().saved().unwrap().len(), 1);
    }

    #[test]
    fn view_shows_detail() {
        let mut s = session(cable_store(), "V\n1\n\nS\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("Produkt: Cable"));
        assert!(out.contains("Beskrivning: USB-C"));
        assert!(out.contains("Pris: 9,99 kr"));
    }

    #[test]
    fn remove_then_view_is_not_found() {
        let mut s = session(cable_store(), "T\n1\n\nV\n1\n\nS\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("Produkten 'Cable' har tagits bort."));
        assert!(out.contains("Produkten hittades inte."));
        assert!(s.api.store().saved().unwrap().is_empty());
    }

    #[test]
    fn bad_add_input_is_reported_and_loop_continues() {
        let mut s = session(cable_store(), "L\nPlug\nAdapter\ncheap\n3\n\nS\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("Felaktig inmatning. Försök igen."));
        assert_eq!(s.api.store().saved().unwrap().len(), 1);
    }

    #[test]
    fn add_then_save() {
        let mut s = session(cable_store(), "L\nPlug\nAdapter\n49,50\n3\n\nS\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("Produkten 'Plug' har lagts till."));
        assert!(out.contains("2) (#2) Plug – 49,50 kr (3 i lager)"));
        let saved = s.api.store().saved().unwrap();
        assert_eq!(saved[1].name, "Plug");
        assert_eq!(saved[1].price, 49.5);
    }

    #[test]
    fn unknown_choice_reprompts() {
        let mut s = session(cable_store(), "Q\n\nS\n");
        s.run().unwrap();
        assert!(output(&s).contains("Ogiltigt val, försök igen."));
    }

    #[test]
    fn end_of_input_quits_without_saving() {
        let mut s = session(cable_store(), "T\n1\n");
        s.run().unwrap();

        assert!(output(&s).contains("Avslutar utan att spara."));
        assert_eq!(s.api.store().saved().unwrap().len(), 1);
    }

    #[test]
    fn missing_catalog_warning_is_shown() {
        let mut s = session(InMemoryStore::new(), "S\n");
        s.run().unwrap();

        let out = output(&s);
        assert!(out.contains("hittades inte"));
        assert_eq!(s.api.store().saved(), Some(&[][..]));
    }
}
