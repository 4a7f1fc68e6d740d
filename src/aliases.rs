//! Hand-authored alias rules mapping common spellings to icon identifiers.
//!
//! Rules are checked top to bottom and the first rule that lists a spelling
//! wins. Targets are not checked against any catalog: an alias may name an
//! identifier the catalog does not carry, and resolution still returns it.

use std::collections::HashMap;
use std::sync::LazyLock;

/// One alias rule: every spelling in `aliases` maps to `target`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasRule {
    aliases: Vec<String>,
    target: String,
}

impl AliasRule {
    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

/// Ordered alias rules plus a spelling index built once at construction.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
    /// Lowercased spelling -> index of the first rule listing it
    index: HashMap<String, usize>,
}

impl AliasTable {
    /// Build a table from `(spellings, target)` pairs in priority order.
    ///
    /// Spellings are lowercased here so lookups never have to.
    pub fn from_rules<I, S, T>(rules: I) -> Self
    where
        I: IntoIterator<Item = (S, T)>,
        S: IntoIterator,
        S::Item: AsRef<str>,
        T: Into<String>,
    {
        let mut table = Self::default();
        for (aliases, target) in rules {
            let position = table.rules.len();
            let aliases: Vec<String> = aliases.into_iter().map(|a| a.as_ref().to_lowercase()).collect();
            for alias in &aliases {
                table.index.entry(alias.clone()).or_insert(position);
            }
            table.rules.push(AliasRule {
                aliases,
                target: target.into(),
            });
        }
        table
    }

    /// The alias rules shipped with the crate.
    pub fn builtin() -> &'static AliasTable {
        &BUILTIN_ALIASES
    }

    /// Target of the first rule listing `key`. `key` must already be
    /// normalized (lowercased and trimmed).
    pub fn lookup(&self, key: &str) -> Option<&str> {
        self.index.get(key).map(|&position| self.rules[position].target())
    }

    /// Rules in priority order.
    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

static BUILTIN_ALIASES: LazyLock<AliasTable> =
    LazyLock::new(|| AliasTable::from_rules(BUILTIN_ALIAS_RULES.iter().map(|&(aliases, target)| (aliases, target))));

/// Built-in rules in priority order.
pub static BUILTIN_ALIAS_RULES: &[(&[&str], &str)] = &[
    // JavaScript frameworks & libraries
    (&["vue.js", "vue js", "vue"], "vuejs"),
    (&["react.js", "react js", "react"], "react"),
    (&["react native"], "react"),
    (&["angular.js", "angular js", "angular"], "angularjs"),
    (&["node.js", "node js", "node"], "nodejs"),
    (&["express.js", "express js", "express"], "express"),
    (&["next.js", "next js"], "nextjs"),
    (&["nuxt.js", "nuxt js"], "nuxtjs"),
    (&["jquery"], "jquery"),
    (&["d3", "d3.js"], "d3js"),
    // Core web
    (&["js"], "javascript"),
    (&["ts"], "typescript"),
    (&["html", "html 5"], "html5"),
    (&["css", "css 3"], "css3"),
    // CSS frameworks
    (&["tailwind css", "tailwind"], "tailwindcss"),
    (&["sass"], "sass"),
    (&["less"], "less"),
    (&["bootstrap"], "bootstrap"),
    // C family & .NET
    (&["c#"], "csharp"),
    (&["c++"], "cplusplus"),
    (&[".net", "dotnet"], "dot-net"),
    (&["sql server", "microsoft sql server"], "microsoftsqlserver"),
    // Java & JVM
    (&["java"], "java"),
    (&["spring", "spring boot"], "spring"),
    (&["kotlin"], "kotlin"),
    // Python & data science
    (&["jupyter notebook", "jupyter", "jupyterlab", "jupyter lab"], "jupyter"),
    (&["fastapi"], "fastapi"),
    (&["django"], "django"),
    (&["flask"], "flask"),
    // Databases
    (&["postgresql", "postgres"], "postgresql"),
    (&["mongo", "mongodb"], "mongodb"),
    (&["mysql"], "mysql"),
    (&["sqlite"], "sqlite"),
    (&["redis"], "redis"),
    // Cloud & DevOps
    (&["aws", "amazon web services"], "amazonwebservices"),
    (&["gcp", "google cloud"], "googlecloud"),
    (&["kubernetes", "k8s"], "kubernetes"),
    (&["digital ocean"], "digitalocean"),
    (&["tf", "tensorflow"], "tensorflow"),
    (&["docker"], "docker"),
    (&["git"], "git"),
    (&["linux"], "linux"),
    // Mobile
    (&["android"], "android"),
    (&["flutter"], "flutter"),
    (&["swift"], "swift"),
    // Tools
    (&["go", "golang"], "go"),
    (&["visual studio code", "vscode"], "vscode"),
    (&["visual studio"], "visualstudio"),
    (&["ruby on rails", "rails"], "rails"),
    (&["php"], "php"),
    (&["figma"], "figma"),
    (&["after effects"], "aftereffects"),
    // Data science & AI
    (&["pytorch"], "pytorch"),
    (&["scikit-learn", "sklearn"], "scikit-learn"),
    (&["pandas"], "pandas"),
    (&["numpy"], "numpy"),
    (&["r", "rlang"], "r"),
    (&["matlab"], "matlab"),
    // More cloud & DevOps
    (&["azure"], "azure"),
    (&["firebase"], "firebase"),
    (&["oracle", "oci"], "oracle"),
    (&["terraform"], "terraform"),
    (&["ansible"], "ansible"),
    (&["jenkins"], "jenkins"),
    (&["github", "github actions"], "github"),
    (&["gitlab"], "gitlab"),
    (&["bitbucket"], "bitbucket"),
    (&["nginx"], "nginx"),
    (&["apache"], "apache"),
    (&["kafka", "apache kafka"], "kafka"),
    // Shell & scripting
    (&["bash", "shell", "shell script"], "bash"),
    (&["powershell"], "powershell"),
    // Other languages & frameworks
    (&["c"], "c"),
    (&["dart"], "dart"),
    (&["svelte"], "svelte"),
    (&["graphql"], "graphql"),
    (&["wordpress"], "wordpress"),
    (&["laravel"], "laravel"),
    // Game dev
    (&["unity"], "unity"),
    (&["unreal engine"], "unrealengine"),
    // Design & productivity
    (&["blender"], "blender"),
    (&["photoshop"], "photoshop"),
    (&["illustrator"], "illustrator"),
    (&["adobe xd", "xd"], "xd"),
    (&["jira"], "jira"),
    (&["trello"], "trello"),
    (&["notion"], "notion"),
    // JS tooling
    (&["jest"], "jest"),
    (&["cypress"], "cypress"),
    (&["webpack"], "webpack"),
    (&["vite", "vitejs"], "vitejs"),
    (&["babel"], "babel"),
    (&["eslint"], "eslint"),
    (&["prettier"], "prettier"),
    // Hardware
    (&["raspberry pi"], "raspberrypi"),
    // More languages
    (&["rust"], "rust"),
    (&["scala"], "scala"),
    (&["lua"], "lua"),
    (&["perl"], "perl"),
    (&["elixir"], "elixir"),
    (&["haskell"], "haskell"),
    (&["clojure"], "clojure"),
    (&["erlang"], "erlang"),
    (&["f#", "fsharp"], "fsharp"),
    (&["objective-c", "objectivec"], "objectivec"),
    // More DevOps & networking
    (&["prometheus"], "prometheus"),
    (&["grafana"], "grafana"),
    (&["vagrant"], "vagrant"),
    (&["HAProxy"], "haproxy"),
    (&["travis", "travis ci"], "travis"),
    (&["circleci"], "circleci"),
    (&["sonarqube"], "sonarqube"),
    // More data & databases
    (&["elasticsearch"], "elasticsearch"),
    (&["kibana"], "kibana"),
    (&["logstash"], "logstash"),
    (&["cassandra"], "cassandra"),
    (&["couchdb"], "couchdb"),
    (&["neo4j"], "neo4j"),
    (&["rabbitmq"], "rabbitmq"),
    // More frameworks & JS
    (&["sveltekit"], "svelte"),
    (&["gatsby"], "gatsby"),
    (&["ember"], "ember"),
    (&["backbone", "backbonejs"], "backbonejs"),
    (&["redux"], "redux"),
    (&["gulp"], "gulp"),
    (&["grunt"], "grunt"),
    // Editors & apps
    (&["qt"], "qt"),
    (&["unreal"], "unrealengine"),
    (&["sketch"], "sketch"),
    (&["invision"], "invision"),
    (&["slack"], "slack"),
    (&["discord"], "discord"),
    (&["atom"], "atom"),
    (&["vim"], "vim"),
    (&["neovim", "nvim"], "neovim"),
    (&["sublime text"], "sublimetext"),
    (&["android studio"], "androidstudio"),
    (&["xcode"], "xcode"),
    (&["intellij"], "intellij"),
    (&["pycharm"], "pycharm"),
    (&["webstorm"], "webstorm"),
    // Cloud services, shown with the provider icon
    (&["aws s3", "s3"], "amazonwebservices"),
    (&["aws lambda", "lambda"], "amazonwebservices"),
    (&["aws ec2", "ec2"], "amazonwebservices"),
    (&["aws rds", "rds"], "amazonwebservices"),
    (&["azure functions"], "azure"),
    (&["google cloud functions", "gcloud functions"], "googlecloud"),
    (&["heroku"], "heroku"),
    // CMS
    (&["joomla"], "joomla"),
    (&["drupal"], "drupal"),
    (&["shopify"], "shopify"),
    (&["magento"], "magento"),
    // More JS & CSS
    (&["npm"], "npm"),
    (&["yarn"], "yarn"),
    (&["pnpm"], "pnpm"),
    (&["styled components"], "styledcomponents"),
    (&["emotion"], "emotion"),
    (&["material ui", "mui"], "materialui"),
    // Testing
    (&["mocha"], "mocha"),
    (&["chai"], "chai"),
    (&["selenium"], "selenium"),
    (&["puppeteer"], "puppeteer"),
    (&["playwright"], "playwright"),
    // Other tools
    (&["postman"], "postman"),
    (&["confluence"], "confluence"),
    (&["blender"], "blender"),
    (&["premiere pro", "premiere"], "premierepro"),
    (&["rstudio"], "rstudio"),
    (&["eclipse"], "eclipse"),
    (&["webflow"], "webflow"),
    // PHP ecosystem
    (&["composer"], "composer"),
    (&["symfony"], "symfony"),
    (&["codeigniter"], "codeigniter"),
    (&["cakephp"], "cakephp"),
    (&["doctrine"], "doctrine"),
    // Ruby ecosystem
    (&["ruby"], "ruby"),
    (&["rubygems"], "rubygems"),
    // .NET ecosystem
    (&["blazor"], "blazor"),
    (&["entity framework", "ef"], "entityframeworkcore"),
    // More databases
    (&["datagrip"], "datagrip"),
    (&["dbeaver"], "dbeaver"),
    (&["dynamodb", "aws dynamodb"], "dynamodb"),
    (&["couchbase"], "couchbase"),
    // Build tools & CI/CD
    (&["gradle"], "gradle"),
    (&["maven"], "maven"),
    (&["ant"], "ant"),
    (&["teamcity"], "teamcity"),
    (&["azure devops"], "azure"),
    (&["argocd", "argo cd"], "argocd"),
    // Virtualization & orchestration
    (&["virtualbox"], "virtualbox"),
    (&["docker compose"], "docker"),
    (&["vmware"], "vmware"),
    (&["openshift"], "openshift"),
    (&["rancher"], "rancher"),
    // Misc
    (&["putty"], "putty"),
    (&["threejs", "three.js"], "threejs"),
    (&["socket.io", "socket io"], "socketio"),
    (&["markdown", "md"], "markdown"),
    (&["docusaurus"], "docusaurus"),
    (&["apache spark", "spark"], "apachespark"),
    (&["hadoop"], "hadoop"),
    (&["rpi"], "raspberrypi"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_rule_wins() {
        let table = AliasTable::from_rules([(vec!["pg"], "postgresql"), (vec!["pg", "postgres"], "pgsql")]);
        assert_eq!(table.lookup("pg"), Some("postgresql"));
        assert_eq!(table.lookup("postgres"), Some("pgsql"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_literals_are_lowercased_at_construction() {
        let table = AliasTable::from_rules([(["HAProxy"], "haproxy")]);
        assert_eq!(table.rules()[0].aliases(), ["haproxy"]);
        assert_eq!(table.lookup("haproxy"), Some("haproxy"));
        // Lookup keys are expected pre-normalized
        assert_eq!(table.lookup("HAProxy"), None);
    }

    #[test]
    fn test_no_punctuation_folding() {
        let table = AliasTable::builtin();
        assert_eq!(table.lookup("vue.js"), Some("vuejs"));
        assert_eq!(table.lookup("vue js"), Some("vuejs"));
        assert_eq!(table.lookup("vue"), Some("vuejs"));
        assert_eq!(table.lookup("vuejs "), None);
        assert_eq!(table.lookup("vue-js"), None);
    }

    #[test]
    fn test_builtin_targets_are_not_filtered() {
        // "kafka" is not a devicon identifier but the rule still answers
        assert_eq!(AliasTable::builtin().lookup("apache kafka"), Some("kafka"));
    }

    #[test]
    fn test_builtin_literals_are_normalized() {
        for rule in AliasTable::builtin().rules() {
            for alias in rule.aliases() {
                assert_eq!(alias, &alias.to_lowercase());
                assert_eq!(alias, alias.trim(), "alias {alias:?} has surrounding whitespace");
            }
        }
    }

    #[test]
    fn test_redundant_rules_keep_first_position() {
        let table = AliasTable::builtin();
        let first = table
            .rules()
            .iter()
            .position(|rule| rule.aliases().iter().any(|a| a == "blender"))
            .expect("blender rule");
        assert_eq!(table.index.get("blender"), Some(&first));
    }
}
