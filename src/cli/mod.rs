//! Interface de linha de comando do Concursos.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::embed::DEFAULT_CONCURSO;

/// Concursos - resultados da Mega-Sena com cache local.
#[derive(Parser, Debug)]
#[command(name = "concursos")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Arquivo de configuração.
    #[arg(short, long, default_value = "concursos.toml")]
    pub config: PathBuf,

    /// Modo verbose.
    #[arg(short, long)]
    pub verbose: bool,

    /// Modo silencioso.
    #[arg(short, long)]
    pub quiet: bool,

    /// Comando a executar.
    #[command(subcommand)]
    pub command: Commands,
}

/// Comandos disponíveis.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Inicializa configuração no diretório atual.
    Init {
        /// Diretório de destino (padrão: diretório atual).
        #[arg(short, long)]
        path: Option<PathBuf>,
    },

    /// Exibe o resultado de um concurso.
    Show {
        /// Número do concurso ou "latest".
        #[arg(short = 'n', long, default_value = DEFAULT_CONCURSO)]
        concurso: String,
    },

    /// Lista os concursos salvos localmente.
    List {
        /// Número máximo de concursos.
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Saída em JSON.
        #[arg(long)]
        json: bool,
    },

    /// Diagnostica problemas de configuração.
    Doctor,

    /// Mostra versão.
    Version,
}
