use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Query a running bio-relay from the command line", long_about = None)]
struct Cli {
    #[arg(short, long, env = "BIO_RELAY_URL", default_value = "http://127.0.0.1:9001")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay liveness
    Health,
    /// Search UniProtKB for primary accessions
    Search {
        query: String,
        #[arg(short, long, default_value_t = 5)]
        limit: u32,
    },
    /// Fetch a simplified UniProtKB entry
    Entry { accession: String },
    /// List PDB structures mapped to a UniProt accession
    Mappings { accession: String },
    /// Fetch the PDBe summary of a PDB entry
    Summary { pdb_id: String },
    /// Look up an AlphaFold prediction
    Prediction { accession: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let request = match &cli.command {
        Commands::Health => client.get(format!("{base}/health")),
        Commands::Search { query, limit } => client
            .get(format!("{base}/uniprot/search"))
            .query(&[("query", query.as_str()), ("limit", limit.to_string().as_str())]),
        Commands::Entry { accession } => client
            .get(format!("{base}/uniprot/entry"))
            .query(&[("accession", accession)]),
        Commands::Mappings { accession } => client
            .get(format!("{base}/pdb/search_by_uniprot"))
            .query(&[("accession", accession)]),
        Commands::Summary { pdb_id } => client
            .get(format!("{base}/pdb/summary"))
            .query(&[("pdb_id", pdb_id)]),
        Commands::Prediction { accession } => client
            .get(format!("{base}/af/prediction"))
            .query(&[("accession", accession)]),
    };

    let res = request.send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        std::process::exit(1);
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
