use anyhow::{Context, Error};
use appshell::{App, Credentials, HttpAuthApi, SignupPayload};
use structopt::StructOpt;
use url::Url;

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let args = Args::from_args();

    log::debug!("Starting application with {:#?}", args);

    let api = HttpAuthApi::new(args.api_url.clone())?;
    let mut app = App::new(api);

    match args.cmd {
        Command::Navigate { path } => {
            app.navigate(&path);
            let frame = app.render();
            println!("{} => {:?}", app.location(), frame.page);
            match frame.navigation.current_user_id {
                Some(user) => println!("Logged in as {}", user),
                None => println!("Not logged in"),
            }
        },
        Command::Login { fields } => {
            app.navigate(appshell::routes::LOGIN);
            let credentials = fields
                .iter()
                .map(String::as_str)
                .map(parse_field)
                .collect::<Result<Credentials, Error>>()?;
            let outcome = app.login_user(credentials).await?;
            println!("{}", serde_json::to_string_pretty(&outcome.response)?);
            println!("{}", serde_json::to_string_pretty(&outcome.user_info)?);
        },
        Command::Signup { fields } => {
            app.navigate(appshell::routes::SIGNUP);
            let payload = fields
                .iter()
                .map(String::as_str)
                .map(parse_field)
                .collect::<Result<SignupPayload, Error>>()?;
            app.signup_user(&payload);
        },
    }

    Ok(())
}

fn parse_field(field: &str) -> Result<(String, String), Error> {
    let (key, value) = field
        .split_once('=')
        .with_context(|| format!("\"{}\" isn't a key=value pair", field))?;

    Ok((key.to_string(), value.to_string()))
}

#[derive(Debug, StructOpt)]
struct Args {
    #[structopt(
        long = "api-url",
        default_value = "http://localhost:3000/api",
        help = "The auth API's base URL"
    )]
    api_url: Url,
    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Show the page a path routes to.
    Navigate {
        #[structopt(help = "The path to visit")]
        path: String,
    },
    /// Submit the login form.
    Login {
        #[structopt(help = "Form fields, as key=value")]
        fields: Vec<String>,
    },
    /// Submit the signup form.
    Signup {
        #[structopt(help = "Form fields, as key=value")]
        fields: Vec<String>,
    },
}
