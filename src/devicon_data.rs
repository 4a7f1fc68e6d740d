//! Devicon catalog data
//!
//! Auto-generated from the devicon lookup map (devicon.json + display names).
//! Devicon release: v2.16.0
//!
//! Entries are kept in manifest order (alphabetical by identifier). This order
//! is the enumeration order of the built-in catalog and therefore decides which
//! entry wins a fallback scan.

/// Devicon release this data was generated from
pub const DEVICON_VERSION: &str = "2.16.0";

/// One icon record: (identifier, display name, tags, svg versions)
pub type DeviconRecord = (&'static str, &'static str, &'static [&'static str], &'static [&'static str]);

pub static DEVICON_ICONS: &[DeviconRecord] = &[
    ("aftereffects", "After Effects", &["adobe", "video", "motion", "graphics"], &["original", "plain"]),
    ("amazonwebservices", "Amazon Web Services", &["cloud", "hosting", "server"], &["original-wordmark", "plain-wordmark"]),
    ("android", "Android", &["os", "mobile"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("androidstudio", "Android Studio", &["ide", "editor", "mobile"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("angularjs", "AngularJS", &["framework"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("ansible", "Ansible", &["automation", "configuration"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("ant", "Apache Ant", &["build", "java"], &["original", "original-wordmark"]),
    ("apache", "Apache", &["server", "http"], &["plain", "plain-wordmark", "line", "line-wordmark"]),
    ("apachekafka", "Apache Kafka", &["streaming", "messaging"], &["original", "original-wordmark"]),
    ("apachespark", "Apache Spark", &["data", "analytics", "cluster"], &["original", "original-wordmark"]),
    ("argocd", "Argo CD", &["gitops", "continuous-delivery", "kubernetes"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("atom", "Atom", &["editor"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("azure", "Azure", &["cloud", "microsoft"], &["original", "plain"]),
    ("babel", "Babel", &["compiler", "transpiler"], &["original", "plain"]),
    ("backbonejs", "Backbone.js", &["framework", "mvc"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("bash", "Bash", &["shell", "command", "terminal"], &["original", "plain"]),
    ("bitbucket", "Bitbucket", &["version-control", "atlassian"], &["original", "original-wordmark"]),
    ("blazor", "Blazor", &["framework", "webassembly", "dotnet"], &["original"]),
    ("blender", "Blender", &["3d", "modeling", "animation"], &["original", "original-wordmark"]),
    ("bootstrap", "Bootstrap", &["css", "framework"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("c", "C", &["programming", "language"], &["original", "plain", "line"]),
    ("cakephp", "CakePHP", &["framework", "php"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("cassandra", "Apache Cassandra", &["database", "nosql"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("circleci", "CircleCI", &["continuous-integration", "pipeline"], &["plain", "plain-wordmark"]),
    ("clojure", "Clojure", &["programming", "language", "lisp"], &["original", "line"]),
    ("codeigniter", "CodeIgniter", &["framework", "php"], &["plain", "plain-wordmark"]),
    ("composer", "Composer", &["dependency-manager", "php"], &["original", "line", "line-wordmark"]),
    ("confluence", "Confluence", &["atlassian", "wiki", "documentation"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("couchbase", "Couchbase", &["database", "nosql"], &["original", "plain"]),
    ("couchdb", "Apache CouchDB", &["database", "nosql"], &["original", "plain"]),
    ("cplusplus", "C++", &["programming", "language"], &["original", "plain", "line"]),
    ("csharp", "C#", &["programming", "language", "dotnet"], &["original", "plain", "line"]),
    ("css3", "CSS3", &["stylesheet", "styles"], &["original", "plain", "plain-wordmark"]),
    ("cypressio", "Cypress", &["testing", "e2e"], &["original", "plain"]),
    ("d3js", "D3.js", &["visualization", "charts"], &["original", "plain"]),
    ("dart", "Dart", &["programming", "language"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("datagrip", "DataGrip", &["ide", "database", "jetbrains"], &["original", "plain"]),
    ("dbeaver", "DBeaver", &["database", "client"], &["original"]),
    ("digitalocean", "DigitalOcean", &["cloud", "hosting"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("discord", "Discord", &["chat", "community"], &["original", "plain", "original-wordmark", "plain-wordmark"]),
    ("django", "Django", &["framework", "python"], &["plain", "plain-wordmark"]),
    ("docker", "Docker", &["container", "virtualization"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("doctrine", "Doctrine", &["orm", "php"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("docusaurus", "Docusaurus", &["documentation", "static-site"], &["original", "plain"]),
    ("dot-net", ".NET", &["framework", "microsoft"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("drupal", "Drupal", &["cms"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("dynamodb", "Amazon DynamoDB", &["database", "nosql", "aws"], &["original", "plain"]),
    ("eclipse", "Eclipse", &["ide", "editor", "java"], &["original", "original-wordmark", "plain"]),
    ("elasticsearch", "Elasticsearch", &["search", "analytics"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("elixir", "Elixir", &["programming", "language", "functional"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("ember", "Ember.js", &["framework"], &["original-wordmark"]),
    ("entityframeworkcore", "Entity Framework Core", &["orm", "dotnet"], &["original", "plain"]),
    ("erlang", "Erlang", &["programming", "language", "functional"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("eslint", "ESLint", &["linter", "code-quality"], &["original", "original-wordmark", "plain", "plain-wordmark", "line", "line-wordmark"]),
    ("express", "Express", &["framework", "server"], &["original", "original-wordmark"]),
    ("fastapi", "FastAPI", &["framework", "python", "api"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("figma", "Figma", &["design", "prototyping"], &["original", "plain"]),
    ("firebase", "Firebase", &["cloud", "backend", "google"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("flask", "Flask", &["framework", "python", "microframework"], &["original", "original-wordmark"]),
    ("flutter", "Flutter", &["framework", "mobile", "ui"], &["original", "plain"]),
    ("fsharp", "F#", &["programming", "language", "functional"], &["original", "plain"]),
    ("gatsby", "Gatsby", &["framework", "static-site", "react"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("git", "Git", &["version-control"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("github", "GitHub", &["version-control", "hosting"], &["original", "original-wordmark"]),
    ("gitlab", "GitLab", &["version-control", "continuous-integration"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("go", "Go", &["programming", "language"], &["original", "original-wordmark", "plain", "line"]),
    ("googlecloud", "Google Cloud", &["cloud", "hosting", "google"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("gradle", "Gradle", &["build", "java", "automation"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("grafana", "Grafana", &["monitoring", "dashboard", "observability"], &["original", "original-wordmark"]),
    ("graphql", "GraphQL", &["query", "api"], &["plain", "plain-wordmark"]),
    ("grunt", "Grunt", &["task-runner", "build"], &["original", "original-wordmark", "line", "line-wordmark"]),
    ("gulp", "Gulp", &["task-runner", "build"], &["plain"]),
    ("hadoop", "Apache Hadoop", &["data", "distributed", "big-data"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("haskell", "Haskell", &["programming", "language", "functional"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("heroku", "Heroku", &["cloud", "hosting", "paas"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("html5", "HTML5", &["markup", "web"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("illustrator", "Illustrator", &["adobe", "vector", "graphics"], &["plain", "line"]),
    ("intellij", "IntelliJ IDEA", &["ide", "editor", "jetbrains"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("invision", "InVision", &["design", "prototyping"], &["original", "plain"]),
    ("java", "Java", &["programming", "language"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("javascript", "JavaScript", &["programming", "language", "web"], &["original", "plain"]),
    ("jenkins", "Jenkins", &["continuous-integration", "automation", "server"], &["original", "line", "plain"]),
    ("jest", "Jest", &["testing", "test-runner"], &["plain"]),
    ("jira", "Jira", &["atlassian", "issue-tracker", "agile"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("joomla", "Joomla", &["cms"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("jquery", "jQuery", &["library", "dom"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("jupyter", "Jupyter", &["notebook", "data-science", "python"], &["original", "original-wordmark", "plain-wordmark"]),
    ("kibana", "Kibana", &["visualization", "dashboard", "elastic"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("kotlin", "Kotlin", &["programming", "language", "jvm"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("kubernetes", "Kubernetes", &["container", "orchestration", "cloud-native"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("laravel", "Laravel", &["framework", "php"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("less", "Less", &["css", "preprocessor"], &["plain-wordmark"]),
    ("linux", "Linux", &["os", "kernel"], &["original", "plain"]),
    ("logstash", "Logstash", &["logging", "pipeline", "elastic"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("lua", "Lua", &["programming", "language", "scripting"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("magento", "Magento", &["ecommerce", "cms"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("markdown", "Markdown", &["markup", "documentation"], &["original"]),
    ("materialui", "Material UI", &["framework", "react", "components"], &["original", "plain"]),
    ("matlab", "MATLAB", &["programming", "language", "numerical"], &["original", "plain"]),
    ("maven", "Apache Maven", &["build", "java", "dependency-manager"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("microsoftsqlserver", "Microsoft SQL Server", &["database", "relational"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("mocha", "Mocha", &["testing", "test-runner"], &["original", "plain"]),
    ("mongodb", "MongoDB", &["database", "nosql", "document"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("mysql", "MySQL", &["database", "relational"], &["original", "original-wordmark"]),
    ("neo4j", "Neo4j", &["database", "graph"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("neovim", "Neovim", &["editor", "vim"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("nextjs", "Next.js", &["framework", "react", "ssr"], &["original", "original-wordmark", "plain", "line"]),
    ("nginx", "NGINX", &["server", "proxy", "http"], &["original", "original-wordmark"]),
    ("nodejs", "Node.js", &["runtime", "server"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("notion", "Notion", &["productivity", "notes"], &["original", "plain"]),
    ("npm", "npm", &["package-manager", "registry"], &["original-wordmark"]),
    ("numpy", "NumPy", &["library", "numerical", "python"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("nuxtjs", "Nuxt.js", &["framework", "vue", "ssr"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("objectivec", "Objective-C", &["programming", "language", "apple"], &["plain"]),
    ("openshift", "OpenShift", &["container", "kubernetes", "paas"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("oracle", "Oracle", &["database", "cloud"], &["original", "plain"]),
    ("pandas", "pandas", &["library", "data-analysis", "python"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("perl", "Perl", &["programming", "language", "scripting"], &["original", "plain"]),
    ("photoshop", "Photoshop", &["adobe", "image-editing", "graphics"], &["original", "plain"]),
    ("php", "PHP", &["programming", "language", "server"], &["original", "plain"]),
    ("playwright", "Playwright", &["testing", "e2e", "browser"], &["original", "plain"]),
    ("pnpm", "pnpm", &["package-manager"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("postgresql", "PostgreSQL", &["database", "relational"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("postman", "Postman", &["api", "testing", "client"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("powershell", "PowerShell", &["shell", "scripting", "microsoft"], &["original", "plain"]),
    ("premierepro", "Premiere Pro", &["adobe", "video", "editing"], &["original", "plain"]),
    ("prometheus", "Prometheus", &["monitoring", "metrics", "alerting"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("puppeteer", "Puppeteer", &["testing", "browser", "automation"], &["original", "plain"]),
    ("pycharm", "PyCharm", &["ide", "editor", "jetbrains"], &["original", "plain"]),
    ("python", "Python", &["programming", "language"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("pytorch", "PyTorch", &["machine-learning", "deep-learning", "python"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("qt", "Qt", &["framework", "ui", "cross-platform"], &["original", "plain"]),
    ("r", "R", &["programming", "language", "statistics"], &["original", "plain"]),
    ("rabbitmq", "RabbitMQ", &["messaging", "queue", "broker"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("rails", "Ruby on Rails", &["framework", "ruby"], &["original-wordmark", "plain", "plain-wordmark"]),
    ("rancher", "Rancher", &["container", "kubernetes", "management"], &["original", "plain"]),
    ("raspberrypi", "Raspberry Pi", &["hardware", "single-board", "iot"], &["original", "original-wordmark", "line", "line-wordmark"]),
    ("react", "React", &["framework", "library", "ui"], &["original", "original-wordmark"]),
    ("redis", "Redis", &["database", "cache", "key-value"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("redux", "Redux", &["state-management", "react"], &["original", "plain"]),
    ("rstudio", "RStudio", &["ide", "editor", "statistics"], &["original", "plain"]),
    ("ruby", "Ruby", &["programming", "language"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("rubygems", "RubyGems", &["package-manager", "ruby"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("rust", "Rust", &["programming", "language", "systems"], &["original", "plain"]),
    ("sass", "Sass", &["css", "preprocessor"], &["original"]),
    ("scala", "Scala", &["programming", "language", "jvm"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("scikitlearn", "scikit-learn", &["machine-learning", "python", "library"], &["original", "plain"]),
    ("selenium", "Selenium", &["testing", "browser", "automation"], &["original", "plain"]),
    ("sketch", "Sketch", &["design", "prototyping"], &["original", "original-wordmark", "line", "line-wordmark"]),
    ("slack", "Slack", &["chat", "communication"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("socketio", "Socket.IO", &["realtime", "websocket"], &["original", "original-wordmark"]),
    ("sonarqube", "SonarQube", &["code-quality", "static-analysis"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("spring", "Spring", &["framework", "java"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("sqlite", "SQLite", &["database", "embedded", "relational"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("styledcomponents", "styled-components", &["css-in-js", "react"], &["original"]),
    ("svelte", "Svelte", &["framework", "compiler"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("swift", "Swift", &["programming", "language", "apple"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("symfony", "Symfony", &["framework", "php"], &["original", "original-wordmark"]),
    ("tailwindcss", "Tailwind CSS", &["css", "framework", "utility-first"], &["original", "plain", "original-wordmark", "plain-wordmark"]),
    ("teamcity", "TeamCity", &["continuous-integration", "jetbrains"], &["original", "plain"]),
    ("tensorflow", "TensorFlow", &["machine-learning", "deep-learning"], &["original", "original-wordmark", "line", "line-wordmark"]),
    ("terraform", "Terraform", &["infrastructure-as-code", "hashicorp"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("threejs", "three.js", &["3d", "webgl", "graphics"], &["original", "original-wordmark"]),
    ("travis", "Travis CI", &["continuous-integration"], &["plain"]),
    ("trello", "Trello", &["atlassian", "kanban", "productivity"], &["plain", "plain-wordmark"]),
    ("typescript", "TypeScript", &["programming", "language", "superset"], &["original", "plain"]),
    ("unity", "Unity", &["game-engine", "gamedev"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("unrealengine", "Unreal Engine", &["game-engine", "gamedev"], &["original", "original-wordmark"]),
    ("vagrant", "Vagrant", &["virtualization", "hashicorp"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("vim", "Vim", &["editor"], &["original", "plain"]),
    ("virtualbox", "VirtualBox", &["virtualization", "oracle"], &["original", "plain"]),
    ("visualstudio", "Visual Studio", &["ide", "editor", "microsoft"], &["original", "plain", "plain-wordmark"]),
    ("vitejs", "Vite", &["build", "bundler", "dev-server"], &["original", "plain"]),
    ("vmware", "VMware", &["virtualization"], &["original", "original-wordmark", "plain-wordmark"]),
    ("vscode", "Visual Studio Code", &["editor", "microsoft"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("vuejs", "Vue.js", &["framework", "progressive"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("webflow", "Webflow", &["design", "no-code", "hosting"], &["original"]),
    ("webpack", "webpack", &["bundler", "build"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("webstorm", "WebStorm", &["ide", "editor", "jetbrains"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("wordpress", "WordPress", &["cms", "blogging"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
    ("xcode", "Xcode", &["ide", "editor", "apple"], &["original", "plain"]),
    ("xd", "Adobe XD", &["adobe", "design", "prototyping"], &["original", "plain", "line"]),
    ("yarn", "Yarn", &["package-manager"], &["original", "original-wordmark", "plain", "plain-wordmark"]),
];
