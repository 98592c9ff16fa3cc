//! Batch driver over the built-in sample questions

use super::turn::run_turn;
use crate::output::console::ConsoleSink;
use crate::output::labels::Labels;
use colored::Colorize;
use duet_application::Orchestrator;
use duet_domain::{Locale, Query};
use std::io;
use tokio::io::{AsyncBufReadExt, BufReader};

const KOREAN_SAMPLES: [&str; 4] = [
    "AWS Lambda와 EC2의 차이점을 설명해주세요.",
    "머신러닝에서 오버피팅이란 무엇인가요?",
    "Python의 리스트와 튜플의 차이점은?",
    "클라우드 컴퓨팅의 장점을 알려주세요.",
];

const ENGLISH_SAMPLES: [&str; 4] = [
    "Explain the difference between AWS Lambda and EC2.",
    "What is overfitting in machine learning?",
    "What is the difference between a list and a tuple in Python?",
    "What are the benefits of cloud computing?",
];

pub fn sample_queries(locale: Locale) -> &'static [&'static str] {
    match locale {
        Locale::Korean => &KOREAN_SAMPLES,
        Locale::English => &ENGLISH_SAMPLES,
    }
}

/// Runs every sample question in order, optionally waiting for Enter in between.
pub struct BatchRunner {
    orchestrator: Orchestrator,
    pause: bool,
    quiet: bool,
}

impl BatchRunner {
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator,
            pause: true,
            quiet: false,
        }
    }

    pub fn with_pause(mut self, pause: bool) -> Self {
        self.pause = pause;
        self
    }

    pub fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub async fn run(&self) -> io::Result<()> {
        let locale = self.orchestrator.client().locale();
        let labels = Labels::for_locale(locale);
        let queries = sample_queries(locale);
        let mut sink = ConsoleSink::stdout(locale);
        let mut stdin = BufReader::new(tokio::io::stdin());

        println!("\n{}", labels.batch_intro.cyan());

        for (i, text) in queries.iter().enumerate() {
            println!("\n{} {}/{}", labels.batch_step.bold(), i + 1, queries.len());
            run_turn(&self.orchestrator, &Query::new(*text), &mut sink, self.quiet).await;

            if self.pause && i + 1 < queries.len() {
                println!("\n{}", labels.batch_pause);
                let mut line = String::new();
                stdin.read_line(&mut line).await?;
            }
        }

        Ok(())
    }
}
