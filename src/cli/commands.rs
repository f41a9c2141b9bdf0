//! Implementação dos comandos CLI do Concursos.

use std::path::{Path, PathBuf};

use crate::embed;
use crate::remote::{HttpRemoteClient, RemoteClient};
use crate::resolver::Resolver;
use crate::store::open_store;
use crate::types::config::Config;
use crate::types::DrawRequest;
use crate::ConcursosResult;

/// Initializes configuration in the specified directory.
pub async fn init(path: Option<PathBuf>) -> ConcursosResult<()> {
    let target_dir = path.unwrap_or_else(|| PathBuf::from("."));

    // Create directory if it doesn't exist
    if !target_dir.exists() {
        std::fs::create_dir_all(&target_dir)?;
        tracing::info!("Directory created: {}", target_dir.display());
    }

    let config_path = target_dir.join("concursos.toml");

    if config_path.exists() {
        println!("Configuration already exists at: {}", config_path.display());
        return Ok(());
    }

    // Create .concursos/ directory for the database
    let data_dir = target_dir.join(".concursos");
    if !data_dir.exists() {
        std::fs::create_dir_all(&data_dir)?;
        tracing::info!(".concursos/ directory created");
    }

    update_gitignore(&target_dir)?;

    let config = Config::default_config();
    config.save(&config_path)?;

    println!("Concursos initialized successfully!");
    println!("Configuration created at: {}", config_path.display());
    println!("Data directory: .concursos/");
    println!();
    println!("Next steps:");
    println!("  1. Check the setup: concursos doctor");
    println!("  2. Show the latest draw: concursos show");

    Ok(())
}

/// Updates or creates .gitignore to include .concursos/
fn update_gitignore(target_dir: &Path) -> ConcursosResult<()> {
    let gitignore_path = target_dir.join(".gitignore");
    let entry = ".concursos/";
    let comment = "# Concursos - local draw cache";

    if gitignore_path.exists() {
        let content = std::fs::read_to_string(&gitignore_path)?;

        if content
            .lines()
            .any(|line| line.trim() == entry || line.trim() == ".concursos")
        {
            tracing::debug!(".gitignore already contains .concursos/");
            return Ok(());
        }

        let mut new_content = content.trim_end().to_string();
        if !new_content.is_empty() {
            new_content.push_str("\n\n");
        }
        new_content.push_str(comment);
        new_content.push('\n');
        new_content.push_str(entry);
        new_content.push('\n');

        std::fs::write(&gitignore_path, new_content)?;
        println!(".gitignore updated with .concursos/");
    } else {
        let content = format!("{}\n{}\n", comment, entry);
        std::fs::write(&gitignore_path, content)?;
        println!(".gitignore created with .concursos/");
    }

    Ok(())
}

/// Exibe um concurso, do cache local ou da API.
pub async fn show(concurso: &str, config: &Config) -> ConcursosResult<()> {
    let resolver = Resolver::from_config(config)?;

    let text = embed::render(&resolver, Some(concurso)).await;
    println!("{}", text);

    let stats = resolver.stats();
    tracing::debug!(
        hits = stats.hits,
        misses = stats.misses,
        remote_fetches = stats.remote_fetches,
        inserts = stats.inserts,
        "Resolução concluída"
    );

    Ok(())
}

/// Lista os concursos salvos.
pub async fn list(limit: usize, json: bool, config: &Config) -> ConcursosResult<()> {
    if !config.store.enabled {
        println!("Armazenamento local está desabilitado na configuração.");
        return Ok(());
    }

    if !config.store.db_path.exists() {
        println!("Nenhum concurso salvo ainda.");
        println!("Execute 'concursos show' para começar a preencher o cache.");
        return Ok(());
    }

    let store = open_store(&config.store)?;
    let draws = store.list(limit).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&draws)?);
        return Ok(());
    }

    if draws.is_empty() {
        println!("Nenhum concurso salvo ainda.");
        return Ok(());
    }

    println!("Concursos salvos ({} de {}):\n", draws.len(), store.count().await?);
    for draw in &draws {
        println!(
            "  {:>6}  {:<10}  {}",
            draw.record.identifier,
            draw.record.date,
            draw.record.numbers.join(", ")
        );
    }

    Ok(())
}

/// Diagnostica problemas de configuração.
pub async fn doctor(config: &Config) -> ConcursosResult<()> {
    println!("Diagnosticando configuração do Concursos...\n");

    let mut issues: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    println!("✓ Configuração carregada");

    if config.store.enabled {
        match open_store(&config.store) {
            Ok(store) => match store.count().await {
                Ok(count) => println!(
                    "✓ Banco em {} ({} concursos salvos)",
                    config.store.db_path.display(),
                    count
                ),
                Err(e) => issues.push(format!("Banco não pôde ser lido: {}", e)),
            },
            Err(e) => issues.push(format!(
                "Banco em {} não pôde ser aberto: {}",
                config.store.db_path.display(),
                e
            )),
        }
    } else {
        warnings.push("Armazenamento local desabilitado - toda consulta irá à API".to_string());
    }

    match HttpRemoteClient::from_config(&config.api) {
        Ok(client) => {
            println!("✓ URL da API: {}", client.base_url());
            match client.fetch(&DrawRequest::Latest).await {
                Ok(record) => println!("✓ API respondeu (último concurso: {})", record.identifier),
                Err(e) => warnings.push(format!("API indisponível: {} ({})", e, e.detail())),
            }
        }
        Err(e) => issues.push(e.to_string()),
    }

    // Resumo
    println!();
    if issues.is_empty() && warnings.is_empty() {
        println!("✓ Tudo OK! Concursos está pronto para uso.");
    } else {
        if !warnings.is_empty() {
            println!("Avisos:");
            for warning in warnings {
                println!("  ⚠ {}", warning);
            }
        }
        if !issues.is_empty() {
            println!("Problemas:");
            for issue in issues {
                println!("  ✗ {}", issue);
            }
        }
    }

    Ok(())
}

/// Mostra versão.
pub fn version() {
    println!("concursos {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Resultados da Mega-Sena com cache local");
}
