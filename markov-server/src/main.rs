use actix_web::{App, HttpResponse, HttpServer, Responder, get, web};

use serde::Deserialize;

use markov_core::corpus;
use markov_core::model::markov_model::{Model, build_model};

/// Default generation attempts when the query does not set a bound.
const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Default byte cap on one generated sentence.
const DEFAULT_MAX_LEN: usize = 4096;

/// Struct representing query parameters for the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	ending: Option<String>,
	max_attempts: Option<usize>,
	max_len: Option<usize>,
}

impl GenerateParams {
	/// Determines the target ending punctuation, if any.
	fn target(&self) -> Result<Option<char>, String> {
		match &self.ending {
			None => Ok(None),
			Some(s) => {
				let mut chars = s.chars();
				match (chars.next(), chars.next()) {
					(Some(c @ ('.' | '?' | '!')), None) => Ok(Some(c)),
					_ => Err("Ending must be one of '.', '?' or '!'".into()),
				}
			}
		}
	}
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates one sentence from the loaded model. With an `ending`
/// parameter, rejection-samples until the sentence ends in that mark;
/// answers 404 when no attempt matches within the bound.
#[get("/v1/generate")]
async fn get_generated(model: web::Data<Model<'static>>, query: web::Query<GenerateParams>) -> impl Responder {
	let max_attempts = query.max_attempts.unwrap_or(DEFAULT_MAX_ATTEMPTS);
	let max_len = query.max_len.unwrap_or(DEFAULT_MAX_LEN);

	let target = match query.target() {
		Ok(t) => t,
		Err(e) => return HttpResponse::BadRequest().body(e),
	};

	let generated = match target {
		Some(c) => model.generate_sentence_ending_in(c, max_attempts, max_len),
		None => model.generate_sentence(max_len),
	};

	match generated {
		Some(sentence) => HttpResponse::Ok().body(sentence),
		None => HttpResponse::NotFound().body("No matching sentence found"),
	}
}

/// HTTP GET endpoint `/v1/stats`
///
/// Reports the size of the loaded model.
#[get("/v1/stats")]
async fn get_stats(model: web::Data<Model<'static>>) -> impl Responder {
	HttpResponse::Ok().body(format!("{} distinct tokens", model.token_count()))
}

/// Main entry point for the server.
///
/// Loads and sanitizes the corpus (first argument, `pg84.txt` by default),
/// builds the model once, and serves it read-only; generation draws from
/// each worker thread's own RNG, so no locking is needed.
///
/// # Notes
/// - The server binds to 127.0.0.1:5000.
/// - The corpus buffer is leaked so the model can borrow it for the whole
///   process lifetime.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let path = std::env::args().nth(1).unwrap_or_else(|| "pg84.txt".to_owned());
	let text: &'static str = Box::leak(corpus::load_corpus(&path)?.into_boxed_str());
	let model = build_model(text).map_err(std::io::Error::other)?;
	let shared_model = web::Data::new(model);

	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_stats)
	})
		.bind(("127.0.0.1", 5000))?
		.run()
		.await
}
