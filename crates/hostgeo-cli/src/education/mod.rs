//! Educational features: what each command asks of which service.

use colored::Colorize;
use hostgeo::Endpoints;

/// Command explanation builder.
pub struct Explain {
    title: String,
    description: String,
    requests: Vec<String>,
    what_happens: Vec<String>,
    learn_more: Option<String>,
}

impl Explain {
    fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            description: String::new(),
            requests: Vec::new(),
            what_happens: Vec::new(),
            learn_more: None,
        }
    }

    fn description(mut self, desc: &str) -> Self {
        self.description = desc.to_string();
        self
    }

    fn request(mut self, request: String) -> Self {
        self.requests.push(request);
        self
    }

    fn step(mut self, step: &str) -> Self {
        self.what_happens.push(step.to_string());
        self
    }

    fn learn(mut self, url: &str) -> Self {
        self.learn_more = Some(url.to_string());
        self
    }

    /// Print the explanation to stdout.
    pub fn print(&self) {
        println!();
        println!("{}", format!("=== {} ===", self.title).bold().cyan());
        println!("{}", self.description);
        println!();

        if !self.what_happens.is_empty() {
            println!("{}", "How it works:".bold());
            for (i, step) in self.what_happens.iter().enumerate() {
                println!("  {}. {}", i + 1, step);
            }
            println!();
        }

        if !self.requests.is_empty() {
            println!("{}", "Requests:".bold());
            for request in &self.requests {
                println!("  {}", request.dimmed());
            }
        }

        if let Some(url) = &self.learn_more {
            println!();
            println!("{} {}", "Learn more:".bold(), url.cyan().underline());
        }

        println!();
        println!("{}", "=== Results ===".bold().cyan());
        println!();
    }

    // ========================================================================
    // Factory methods for each command
    // ========================================================================

    pub fn lookup(target: &str, endpoints: &Endpoints, media: bool) -> Self {
        let mut explain = Self::new("Site Lookup")
            .description(&format!(
                "Finds where {target} is hosted and which countries border that location."
            ))
            .step("Strips scheme, port, path and query to get the bare hostname")
            .step("Asks a DNS-over-HTTPS resolver for the first A record")
            .step("Geolocates the address (country, city, region, ISP)")
            .step("Looks up the country and then all its land neighbors in one batch")
            .request(format!("GET {}/resolve?name=<host>&type=A", endpoints.dns))
            .request(format!("GET {}/<ip>/json/", endpoints.geo))
            .request(format!("GET {}/alpha/<code>", endpoints.countries))
            .request(format!("GET {}/alpha?codes=<codes>", endpoints.countries));

        if media {
            explain = explain
                .step("Fetches the page through a CORS proxy and looks for embedded video")
                .step("Repeats DNS, geolocation and borders for the video server")
                .request(format!("GET {}<page url>", endpoints.proxy));
        }

        explain.learn("https://en.wikipedia.org/wiki/Geolocation_software")
    }

    pub fn resolve(host: &str, endpoints: &Endpoints) -> Self {
        Self::new("DNS Resolve")
            .description(&format!("Resolves {host} to an IPv4 address over HTTPS."))
            .step("Sends an A record query as a plain HTTPS GET")
            .step("Skips CNAME records and takes the first A record")
            .step("Distinguishes 'no such record' from 'resolver unreachable'")
            .request(format!("GET {}/resolve?name={host}&type=A", endpoints.dns))
            .learn("https://developers.google.com/speed/public-dns/docs/doh/json")
    }

    pub fn geo(ip: &str, endpoints: &Endpoints) -> Self {
        Self::new("GeoIP Lookup")
            .description(&format!("Estimates the physical location of {ip}."))
            .step("Queries a GeoIP database keyed by address")
            .step("Locations are approximate: usually the operator's registered site")
            .request(format!("GET {}/{ip}/json/", endpoints.geo))
            .learn("https://en.wikipedia.org/wiki/Internet_geolocation")
    }

    pub fn borders(code: &str, endpoints: &Endpoints) -> Self {
        Self::new("Neighboring Countries")
            .description(&format!("Lists the countries sharing a land border with {code}."))
            .step("Fetches the country record with its border codes")
            .step("Fetches every neighbor in one batched request")
            .step("Island nations report that no neighbors exist")
            .request(format!("GET {}/alpha/{code}", endpoints.countries))
            .request(format!("GET {}/alpha?codes=<codes>", endpoints.countries))
            .learn("https://restcountries.com")
    }

    pub fn media(url: &str, endpoints: &Endpoints) -> Self {
        Self::new("Video Server Discovery")
            .description(&format!("Looks for the server hosting video embedded in {url}."))
            .step("Fetches the page through a CORS proxy")
            .step("Prefers <video src>, then its first <source>, then a video-like <iframe>")
            .step("Resolves and geolocates the host of that source")
            .request(format!("GET {}<page url>", endpoints.proxy))
            .learn("https://developer.mozilla.org/en-US/docs/Web/HTML/Element/video")
    }
}
