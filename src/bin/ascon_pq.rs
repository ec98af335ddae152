//! ascon-pq CLI: Ascon-80pq file encryption
//!
//! Usage:
//!   ascon-pq keygen --output <key_file>
//!   ascon-pq seal --key <key_file> --input <file> [--output <file>] [--aad <aad> | --legacy-aad] [--rate 8|16]
//!   ascon-pq open --key <key_file> --input <file> [--output <file>] [--aad <aad> | --legacy-aad] [--rate 8|16]
//!   ascon-pq inspect <file>

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use zeroize::Zeroizing;

use ascon_pq::artifact::{self, decode_artifact, LEGACY_ASSOCIATED_DATA, MIN_ARTIFACT_BYTES};
use ascon_pq::{Cipher, SecretKey, Variant, KEY_BYTES};

/// Extension appended to sealed files.
const SEALED_EXT: &str = "ascon";

fn main() -> ExitCode {
    init_logging();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "keygen" => cmd_keygen(&args[2..]),
        "seal" => cmd_seal(&args[2..]),
        "open" => cmd_open(&args[2..]),
        "inspect" => cmd_inspect(&args[2..]),
        "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            println!("ascon-pq {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        cmd => {
            eprintln!("error: unknown command '{}'", cmd);
            print_usage();
            Err("unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// `RUST_LOG` selects levels; `ASCON_PQ_LOG_FORMAT=json` switches to JSON lines.
fn init_logging() {
    let log_format = std::env::var("ASCON_PQ_LOG_FORMAT").unwrap_or_else(|_| "pretty".into());
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "ascon_pq=info".into());
    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr);
    if log_format == "json" {
        builder.json().with_target(true).init();
    } else {
        builder.init();
    }
}

fn print_usage() {
    eprintln!(
        r#"ascon-pq: Ascon-80pq authenticated file encryption

USAGE:
    ascon-pq <COMMAND> [OPTIONS]

COMMANDS:
    keygen      Generate a new 20-byte key file
    seal        Encrypt a file (writes nonce || ciphertext || tag)
    open        Decrypt a file
    inspect     Show artifact metadata (no decryption)

EXAMPLES:
    # Generate key
    ascon-pq keygen --output ./pmk.key

    # Encrypt (writes secret.txt.ascon)
    ascon-pq seal --key ./pmk.key --aad "backup|2026" --input secret.txt

    # Decrypt
    ascon-pq open --key ./pmk.key --aad "backup|2026" --input secret.txt.ascon

    # Inspect
    ascon-pq inspect secret.txt.ascon

OPTIONS:
    -k, --key <FILE>       Raw 20-byte key file
    -i, --input <FILE>     Input file (stdin if omitted)
    -o, --output <FILE>    Output file
    -a, --aad <STRING>     Associated data (default: empty)
        --legacy-aad       Fixed 16-byte "abc123" + zero padding associated
                           data, for files from the hacklab encryption tool
    -r, --rate <8|16>      Rate in bytes (default: 8, standard Ascon-80pq)
    -h, --help             Print help
    -V, --version          Print version

ENVIRONMENT:
    RUST_LOG               Log filter (default: ascon_pq=info)
    ASCON_PQ_LOG_FORMAT    "pretty" (default) or "json"
"#
    );
}

/// Options shared by `seal` and `open`.
#[derive(Default)]
struct CipherArgs {
    key_path: Option<PathBuf>,
    input_path: Option<PathBuf>,
    output_path: Option<PathBuf>,
    aad: Vec<u8>,
    variant: Variant,
}

fn parse_cipher_args(args: &[String]) -> Result<CipherArgs, Box<dyn std::error::Error>> {
    let mut opts = CipherArgs::default();
    let mut aad_given = false;
    let mut legacy_aad = false;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--key" | "-k" => {
                i += 1;
                opts.key_path = Some(PathBuf::from(args.get(i).ok_or("missing key path")?));
            }
            "--input" | "-i" => {
                i += 1;
                opts.input_path = Some(PathBuf::from(args.get(i).ok_or("missing input path")?));
            }
            "--output" | "-o" => {
                i += 1;
                opts.output_path = Some(PathBuf::from(args.get(i).ok_or("missing output path")?));
            }
            "--aad" | "-a" => {
                i += 1;
                opts.aad = args.get(i).ok_or("missing aad")?.as_bytes().to_vec();
                aad_given = true;
            }
            "--legacy-aad" => {
                opts.aad = LEGACY_ASSOCIATED_DATA.to_vec();
                legacy_aad = true;
            }
            "--rate" | "-r" => {
                i += 1;
                opts.variant = args.get(i).ok_or("missing rate")?.parse()?;
            }
            _ => return Err(format!("unknown option: {}", args[i]).into()),
        }
        i += 1;
    }

    if aad_given && legacy_aad {
        return Err("--aad and --legacy-aad are mutually exclusive".into());
    }

    Ok(opts)
}

fn load_key(path: &Path) -> Result<SecretKey, Box<dyn std::error::Error>> {
    let bytes = Zeroizing::new(fs::read(path)?);
    SecretKey::from_bytes(&bytes)
        .map_err(|_| format!("key file must be exactly {} bytes", KEY_BYTES).into())
}

fn read_input(path: Option<&Path>) -> io::Result<Vec<u8>> {
    match path {
        Some(path) => fs::read(path),
        None => {
            let mut buf = Vec::new();
            io::stdin().read_to_end(&mut buf)?;
            Ok(buf)
        }
    }
}

fn cmd_keygen(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut output_path = PathBuf::from("pmk.key");

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--output" | "-o" => {
                i += 1;
                output_path = PathBuf::from(args.get(i).ok_or("missing output path")?);
            }
            _ => return Err(format!("unknown option: {}", args[i]).into()),
        }
        i += 1;
    }

    let key = SecretKey::generate();
    fs::write(&output_path, key.as_bytes())?;

    // Restrict key permissions (Unix only)
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mut perms = fs::metadata(&output_path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&output_path, perms)?;
    }

    tracing::info!(path = %output_path.display(), bytes = KEY_BYTES, "generated key");
    Ok(())
}

fn cmd_seal(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_cipher_args(args)?;
    let key_path = opts.key_path.ok_or("missing --key")?;
    let key = load_key(&key_path)?;

    let output_path = match (opts.output_path, &opts.input_path) {
        (Some(path), _) => path,
        (None, Some(input)) => {
            let mut name = input.as_os_str().to_owned();
            name.push(".");
            name.push(SEALED_EXT);
            PathBuf::from(name)
        }
        (None, None) => return Err("missing --output (required when reading stdin)".into()),
    };

    let plaintext = Zeroizing::new(read_input(opts.input_path.as_deref())?);

    let cipher = Cipher::with_variant(opts.variant);
    let start = Instant::now();
    let sealed = artifact::seal(&cipher, key.as_bytes(), &opts.aad, &plaintext)
        .map_err(|_| "encryption failed")?;
    let elapsed = start.elapsed();

    fs::write(&output_path, &sealed)?;

    tracing::info!(
        variant = %opts.variant,
        plaintext_bytes = plaintext.len(),
        artifact_bytes = sealed.len(),
        elapsed = ?elapsed,
        output = %output_path.display(),
        "sealed"
    );
    Ok(())
}

fn cmd_open(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let opts = parse_cipher_args(args)?;
    let key_path = opts.key_path.ok_or("missing --key")?;
    let key = load_key(&key_path)?;

    let sealed = read_input(opts.input_path.as_deref())?;

    let cipher = Cipher::with_variant(opts.variant);
    let start = Instant::now();
    let plaintext = Zeroizing::new(
        artifact::open(&cipher, key.as_bytes(), &opts.aad, &sealed)
            .map_err(|_| "decryption failed (wrong key, corrupted, or mismatched aad/rate)")?,
    );
    let elapsed = start.elapsed();

    let output_path = opts.output_path.or_else(|| {
        let input = opts.input_path.as_ref()?;
        match input.extension() {
            Some(ext) if ext == SEALED_EXT => Some(input.with_extension("")),
            _ => None,
        }
    });

    match output_path {
        Some(path) => {
            if opts.input_path.as_deref() == Some(path.as_path()) {
                return Err("output path would overwrite input".into());
            }
            fs::write(&path, &*plaintext)?;
            tracing::info!(
                variant = %opts.variant,
                artifact_bytes = sealed.len(),
                plaintext_bytes = plaintext.len(),
                elapsed = ?elapsed,
                output = %path.display(),
                "opened"
            );
        }
        None => io::stdout().write_all(&plaintext)?,
    }
    Ok(())
}

fn cmd_inspect(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let input_path = args.first().ok_or("missing file path")?;

    let data = fs::read(input_path)?;
    let parts = decode_artifact(&data).map_err(|_| "invalid artifact (too short)")?;

    println!("Ascon-80pq Artifact");
    println!("===================");
    println!("Nonce:           {}", hex::encode(parts.nonce()));
    println!("Tag:             {}", hex::encode(parts.tag()));
    println!();
    println!("Total Size:      {} bytes", data.len());
    println!("Overhead:        {} bytes", MIN_ARTIFACT_BYTES);
    println!("Plaintext Size:  {} bytes", parts.plaintext_len());

    Ok(())
}
