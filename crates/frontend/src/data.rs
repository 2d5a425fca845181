use std::sync::OnceLock;

use metroline_shared::models::{
    Block, Card, Catalog, Document, LabelPlacement, Line, Span, Station, StationKind,
};

/// Diagram-space extent of the drawn map (grid, line paths, labels).
pub const DIAGRAM_WIDTH: f64 = 1000.0;
pub const DIAGRAM_HEIGHT: f64 = 1500.0;

/// Extent framed by the default fit: the upper region where all lanes are
/// visible, rather than the full diagram height.
pub const OVERVIEW_WIDTH: f64 = 1000.0;
pub const OVERVIEW_HEIGHT: f64 = 800.0;

const FOUNDATION_COLOR: &str = "#0f172a";
const START_COLOR: &str = "#6366f1";
const LANE_A_COLOR: &str = "#854d0e";
const LANE_B_COLOR: &str = "#a855f7";
const LANE_C_COLOR: &str = "#f97316";
const LANE_D_COLOR: &str = "#64748b";
const EXIT_COLOR: &str = "#10b981";

/// The full diagram dataset. Built once, then shared for the app lifetime.
pub fn catalog() -> &'static Catalog {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

// ---------------------------------------------------------------------------
// Content builders
// ---------------------------------------------------------------------------

fn text(s: &str) -> Span {
    Span::Text(s.into())
}

fn strong(s: &str) -> Span {
    Span::Strong(s.into())
}

fn em(s: &str) -> Span {
    Span::Em(s.into())
}

fn heading(s: &str) -> Block {
    Block::Heading(s.into())
}

fn para(s: &str) -> Block {
    Block::Paragraph(vec![Span::Text(s.into())])
}

fn callout(title: &str, body: &str) -> Block {
    Block::Callout {
        title: title.into(),
        body: body.into(),
    }
}

fn numbered(items: &[&str]) -> Block {
    Block::NumberedList(items.iter().map(|s| s.to_string()).collect())
}

fn code_block(s: &str) -> Block {
    Block::Code(s.into())
}

fn quote(s: &str) -> Block {
    Block::Quote(s.into())
}

fn link(url: &str, title: &str, description: Option<&str>) -> Block {
    Block::Link {
        url: url.into(),
        title: title.into(),
        description: description.map(Into::into),
    }
}

fn table(headers: &[&str], rows: &[&[&str]]) -> Block {
    Block::Table {
        headers: headers.iter().map(|s| s.to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|s| s.to_string()).collect())
            .collect(),
    }
}

fn card(title: &str, body: &str, accent: &str) -> Card {
    Card {
        title: title.into(),
        body: body.into(),
        accent: accent.into(),
    }
}

/// The four workflow cards shown at the classification hub and in the Entry
/// Zone guide.
fn lane_cards() -> Vec<Card> {
    vec![
        card(
            "Lane A: Legacy Stack",
            "Older PHP, Java and friends. Mockups and click-dummies first, then integration by hand.",
            LANE_A_COLOR,
        ),
        card(
            "Lane B: Vibe-Coding",
            "Greenfield frontends. One full context dump, visual ping-pong, instant deploy.",
            LANE_B_COLOR,
        ),
        card(
            "Lane C: Agentic Batch",
            "Vibe-coding with control. Hard rules, atomic tasks, every diff reviewed.",
            LANE_C_COLOR,
        ),
        card(
            "Lane D: Daily Driver",
            "IDE-centric maintenance with guardrails. No agents, no pipelines.",
            LANE_D_COLOR,
        ),
    ]
}

// ---------------------------------------------------------------------------
// Catalog assembly
// ---------------------------------------------------------------------------

fn line(
    id: &str,
    name: &str,
    color: &str,
    description: &str,
    path: &str,
    full_content: Option<Document>,
) -> Line {
    Line {
        id: id.into(),
        name: name.into(),
        color: color.into(),
        description: description.into(),
        path: path.into(),
        full_content,
    }
}

#[allow(clippy::too_many_arguments)]
fn station(
    id: &str,
    name: &str,
    x: f64,
    y: f64,
    kind: StationKind,
    line_id: &str,
    label_placement: LabelPlacement,
    description: &str,
    content: Document,
) -> Station {
    Station {
        id: id.into(),
        name: name.into(),
        x,
        y,
        kind,
        line_id: line_id.into(),
        description: description.into(),
        content,
        label_placement,
    }
}

fn build_lines() -> Vec<Line> {
    vec![
        line(
            "foundation",
            "The Foundation",
            FOUNDATION_COLOR,
            "Mental Models & Planning",
            "M 500 50 L 500 450",
            Some(vec![
                callout(
                    "The Core Shift",
                    "Stop treating the LLM like a teammate. Treat it like a compiler for natural language.",
                ),
                heading("You Don't Work with LLMs"),
                Block::Paragraph(vec![
                    text("You "),
                    strong("program"),
                    text(
                        " them. Every prompt is source code: it compiles into output, and the \
                         quality of the output is bounded by the quality of the input.",
                    ),
                ]),
                heading("Why Developers Fail"),
                numbered(&[
                    "Vague inputs: the task is underspecified, so the model guesses.",
                    "Missing constraints: no stack, no style rules, no boundaries.",
                    "No stopping condition: the conversation drifts instead of converging.",
                    "Blind trust: output gets merged without being read.",
                ]),
                heading("The Mental Model"),
                table(
                    &["Programming Concept", "LLM Equivalent"],
                    &[
                        &["Source Code", "Prompt + Context"],
                        &["Compiler", "LLM"],
                        &["Linker", "Manual Edits"],
                        &["Runtime", "Production"],
                    ],
                ),
                para("If something breaks, the bug is in the input (prompt), not the compiler."),
                heading("Planning is Coding"),
                para(
                    "The planning conversation is part of the program. Invest in it the way you \
                     invest in code: structure, constraints, acceptance criteria.",
                ),
            ]),
        ),
        line(
            "start",
            "Entry Zone",
            START_COLOR,
            "Task Classification",
            "M 500 450 L 500 500",
            Some(vec![
                callout(
                    "The Crossroad",
                    "One workflow does not fit every task. Classify the work first, then take \
                     the lane built for it.",
                ),
                heading("Pick Your Lane"),
                para(
                    "Four lanes leave this station. Each is a complete workflow tuned to one \
                     kind of task; mixing them is how sessions go sideways.",
                ),
                Block::CardGrid(lane_cards()),
            ]),
        ),
        line(
            "lane_a",
            "Lane A: Legacy Stack",
            LANE_A_COLOR,
            "Older PHP, Java, etc.",
            "M 500 500 C 500 500, 150 500, 150 550 L 150 1000 C 150 1050, 500 1000, 500 1050",
            Some(vec![
                callout(
                    "When to use",
                    "A grown codebase on an older stack. The model cannot see the whole picture, \
                     and generated code rarely drops in cleanly, so generate artifacts around \
                     the code instead of the code itself.",
                ),
                heading("1. Generate a Mockup"),
                para(
                    "Extract the visual rules of the existing UI into a style guide, then let \
                     the model produce mockup images that respect them.",
                ),
                link(
                    "https://gist.github.com/voku/8615cc2b095ec2d46a3e69faa2595dad",
                    "Style Guide Helper",
                    Some("Prompt for extracting style rules from an existing UI."),
                ),
                heading("2. Click-Dummy"),
                para(
                    "Turn the mockup into a disposable prototype. It exists to settle layout \
                     and flow questions, not to ship.",
                ),
                heading("3. Manual Integration"),
                para(
                    "Port the agreed result into the real codebase by hand. The prototype is a \
                     reference, not a donor.",
                ),
                heading("4. Tests"),
                para(
                    "Have the model draft tests against the integrated code to lock in what \
                     actually got built.",
                ),
            ]),
        ),
        line(
            "lane_b",
            "Lane B: Vibe-Coding",
            LANE_B_COLOR,
            "The 2026 Way",
            "M 500 500 C 500 500, 380 500, 380 550 L 380 1000 C 380 1050, 500 1000, 500 1050",
            Some(vec![
                callout(
                    "When to use",
                    "Greenfield frontends and self-contained webapps, where the model can hold \
                     the whole project and iteration speed beats architecture.",
                ),
                heading("1. Go to AI Studio"),
                para(
                    "Start from a hosted builder and hand it the complete plan in one message: \
                     purpose, audience, structure, content.",
                ),
                link(
                    "https://aistudio.google.com/",
                    "Google AI Studio",
                    None,
                ),
                heading("2. Ping-Pong Time"),
                para(
                    "Iterate visually. Screenshot, point at what is wrong, regenerate. Words \
                     about layout are weaker than pictures of layout.",
                ),
                heading("3. Push 90% Version"),
                para(
                    "The moment the app does its job, stop iterating and push the repository. \
                     The last 10% is cheaper outside the builder.",
                ),
                heading("4. Agentic Cleanup"),
                para("Hand the freshly pushed repo one batch of chores:"),
                code_block(
                    "- Remove GEMINI references\n\
                     - Update README.md to remove AI Studio ads\n\
                     - Add \"Key Files Detector\" helper to README\n\
                     - Add a favicon\n\
                     - Create a contribution link\n\
                     - Configure GitHub Pages deployment\n\
                     - Add GitHub Actions workflow\n\
                     - Build and verify the application works",
                ),
                heading("5. Go Live"),
                para("Pages deployment gives every iteration a live URL."),
                link(
                    "https://dev.to/suckup_de/posts-as-webapps-26lk",
                    "Posts as Webapps",
                    Some("Example webapps created this way."),
                ),
            ]),
        ),
        line(
            "lane_c",
            "Lane C: Agentic Batch",
            LANE_C_COLOR,
            "Vibe-Coding with Control",
            "M 500 500 C 500 500, 620 500, 620 550 L 620 1000 C 620 1050, 500 1000, 500 1050",
            Some(vec![
                callout(
                    "When to use",
                    "Projects you intend to keep. Agents do the typing, but inside rules you \
                     wrote and against tasks you defined.",
                ),
                heading("1. Plan with Restrictions"),
                para(
                    "Write the hard rules into AGENTS.md first: stack, style, forbidden \
                     dependencies, required checks. The agent reads them on every run.",
                ),
                heading("2. Define Tasks"),
                para(
                    "Break the work into atomic entries in docs/TODO.md. One task, one \
                     reviewable diff.",
                ),
                heading("3. Run the Agent"),
                code_block("codex --yolo \"Implement the open tasks from docs/TODO.md\""),
                heading("Why Agents?"),
                para(
                    "Batching keeps you in the reviewer seat instead of the passenger seat. \
                     The risk is losing the mental model of your own project:",
                ),
                quote(
                    "My main pain point is that if you didn't do the coding work anymore you \
                     haven't this mental model of the project in mind.",
                ),
                link(
                    "https://github.com/voku/AmysEcho/",
                    "Amy's Echo",
                    Some("Project built purely via agents."),
                ),
            ]),
        ),
        line(
            "lane_d",
            "Lane D: Daily Driver",
            LANE_D_COLOR,
            "IDE-Centric with Guardrails",
            "M 500 500 C 500 500, 850 500, 850 550 L 850 1000 C 850 1050, 500 1000, 500 1050",
            Some(vec![
                callout(
                    "When to use",
                    "Maintenance, debugging, refactoring in a codebase you know. No agents. \
                     No pipelines. The IDE assistant, on a short leash.",
                ),
                heading("1. Curate Context Explicitly"),
                para("Before asking anything, open the files that define the truth:"),
                numbered(&[
                    "Open the interface or contract.",
                    "Open the concrete implementation.",
                    "Open the relevant test.",
                    "Open involved DTOs.",
                ]),
                Block::Paragraph(vec![
                    strong("Rule: "),
                    text("If the file is not open, it doesn't exist."),
                ]),
                heading("2. Prefer Inline Edit"),
                Block::Paragraph(vec![
                    text("Scoped edits over chat: "),
                    Span::Code("Ctrl + Shift + I".into()),
                    text(" on the selection keeps the diff visible and small."),
                ]),
                heading("3. Reverse Documentation"),
                para(
                    "Make the model explain the code back to you before it changes anything. \
                     Disagreement surfaces stale context immediately.",
                ),
                heading("4. No Passenger Mode"),
                Block::Paragraph(vec![
                    text("The "),
                    em("Tab, Accept, Commit"),
                    text(
                        " loop is a trap. Every suggestion you accept unread is a debt some \
                         future session pays.",
                    ),
                ]),
            ]),
        ),
        line(
            "exit",
            "Shared Exit",
            EXIT_COLOR,
            "Safety & Memory",
            "M 500 1050 L 500 1450",
            Some(vec![
                callout(
                    "The Gatekeeper",
                    "Every lane ends here. Whatever produced the change, the same checks stand \
                     between it and the main branch.",
                ),
                heading("1. Run Checks"),
                para("Build, tests, static analysis. Generated code gets no exemption."),
                heading("2. Fix via Rules"),
                para(
                    "When a check fails, fix the rule or the input that let it happen, not \
                     just the symptom.",
                ),
                heading("3. Draft Commit"),
                para("Let the model draft the commit summary from the final diff."),
                heading("4. Persist"),
                para(
                    "Write what you learned back into the repository: AGENTS.md, docs, rules. \
                     Memory that lives in your head is lost to the next session.",
                ),
            ]),
        ),
    ]
}

fn foundation_stations() -> Vec<Station> {
    vec![
        station(
            "p1",
            "P1: Mental Model",
            500.0,
            80.0,
            StationKind::Stop,
            "foundation",
            LabelPlacement::Right,
            "LLM as Compiler",
            vec![
                heading("Teammate vs. Compiler"),
                table(
                    &["If you treat it like...", "Result"],
                    &[
                        &["A Teammate", "Disappointment"],
                        &["A Compiler", "Valuable Results"],
                    ],
                ),
                para("If something breaks, the bug is in the input, mostly not in the compiler."),
            ],
        ),
        station(
            "p2",
            "P2: Input Discipline",
            500.0,
            180.0,
            StationKind::Stop,
            "foundation",
            LabelPlacement::Left,
            "No Raw Thoughts",
            vec![
                heading("Amplify Clarity"),
                para(
                    "The model amplifies whatever you hand it. Clear constraints come back as \
                     working code; raw thoughts come back as confident noise.",
                ),
                Block::Paragraph(vec![strong("Bad: "), em("\"Implement the refund logic.\"")]),
                code_block(
                    "Context: PHP 8.2, RefundService.\n\
                     Constraint: No new deps.\n\
                     Task: Draft calculation logic only.",
                ),
            ],
        ),
        station(
            "p3",
            "P3: The 90% Rule",
            500.0,
            280.0,
            StationKind::Stop,
            "foundation",
            LabelPlacement::Right,
            "Scaffolding Only",
            vec![
                heading("Stop Prompting"),
                para(
                    "Generated code is scaffolding. The last stretch belongs to you, because \
                     that is where the understanding lives.",
                ),
                quote(
                    "The moment you think 'it's almost right', stop prompting. Fix it manually \
                     or add a test.",
                ),
            ],
        ),
        station(
            "p4",
            "P4: Planning",
            500.0,
            380.0,
            StationKind::Stop,
            "foundation",
            LabelPlacement::Left,
            "Triage & Blind Spots",
            vec![
                heading("Chaos to Structure"),
                para("Before any code, use the model as a triage engine:"),
                numbered(&[
                    "Summarize long ticket threads.",
                    "Extract precise acceptance criteria.",
                    "Identify system invariants.",
                    "Run a \"blind spot analysis\" on the plan.",
                ]),
            ],
        ),
    ]
}

fn start_stations() -> Vec<Station> {
    vec![station(
        "s0",
        "S0: Task Classification",
        500.0,
        480.0,
        StationKind::Hub,
        "start",
        LabelPlacement::TopRight,
        "What kind of work is this?",
        vec![
            heading("Pick Your Lane"),
            para("Classify the task before touching a prompt. Four lanes leave this hub:"),
            Block::CardGrid(lane_cards()),
        ],
    )]
}

fn lane_a_stations() -> Vec<Station> {
    vec![
        station(
            "a1",
            "A1: Style Guide",
            150.0,
            580.0,
            StationKind::Stop,
            "lane_a",
            LabelPlacement::Left,
            "Extract Rules",
            vec![
                heading("Extract the Rules"),
                para(
                    "Distill the existing UI into explicit style rules the model can follow: \
                     colors, spacing, tone, component shapes.",
                ),
                link(
                    "https://gist.github.com/voku/8615cc2b095ec2d46a3e69faa2595dad",
                    "Style Guide Helper",
                    Some("Prompt for extracting style rules from an existing UI."),
                ),
            ],
        ),
        station(
            "a2",
            "A2: Visual Mockup",
            150.0,
            680.0,
            StationKind::Stop,
            "lane_a",
            LabelPlacement::Left,
            "Generate Images",
            vec![
                heading("Pictures Before Code"),
                para(
                    "Generate mockup images against the style guide. Arguing over a picture is \
                     cheap; arguing over integrated code is not.",
                ),
            ],
        ),
        station(
            "a3",
            "A3: Click-Dummy",
            150.0,
            780.0,
            StationKind::Stop,
            "lane_a",
            LabelPlacement::Left,
            "Disposable Prototype",
            vec![
                heading("Built to Throw Away"),
                para(
                    "A click-dummy settles flow and layout questions with stakeholders. It \
                     never touches the real stack, so it can be generated recklessly.",
                ),
            ],
        ),
        station(
            "a4",
            "Manual Integration",
            150.0,
            880.0,
            StationKind::Hub,
            "lane_a",
            LabelPlacement::Left,
            "Hand Porting",
            vec![
                heading("Port by Hand"),
                para(
                    "The agreed prototype gets rebuilt inside the legacy codebase by a person \
                     who knows its conventions. This is the step that cannot be skipped.",
                ),
            ],
        ),
        station(
            "a5",
            "A5: Generated Tests",
            150.0,
            980.0,
            StationKind::Stop,
            "lane_a",
            LabelPlacement::Left,
            "Lock in Reality",
            vec![
                heading("Lock in Reality"),
                para(
                    "Once the integration works, have the model draft tests against it. The \
                     tests pin down what was actually built, not what was planned.",
                ),
            ],
        ),
    ]
}

fn lane_b_stations() -> Vec<Station> {
    vec![
        station(
            "b1",
            "B1: Full Plan",
            380.0,
            560.0,
            StationKind::Stop,
            "lane_b",
            LabelPlacement::Left,
            "One Context Dump",
            vec![
                heading("One Context Dump"),
                para(
                    "Write the whole plan into the first message: purpose, audience, pages, \
                     content. Drip-feeding context produces drip-quality apps.",
                ),
            ],
        ),
        station(
            "b2",
            "B2: Ping-Pong",
            380.0,
            640.0,
            StationKind::Stop,
            "lane_b",
            LabelPlacement::Left,
            "Visual Iteration",
            vec![
                heading("Visual Iteration"),
                para(
                    "Iterate with screenshots, not essays. Point at the broken element and \
                     regenerate until it looks right.",
                ),
            ],
        ),
        station(
            "b3",
            "B3: 90% Stop",
            380.0,
            720.0,
            StationKind::Stop,
            "lane_b",
            LabelPlacement::Left,
            "Freeze",
            vec![
                heading("Freeze"),
                para(
                    "When the app does its job, stop. Builder iterations past 90% start \
                     breaking what already works.",
                ),
            ],
        ),
        station(
            "b4",
            "B4: Push Repo",
            380.0,
            800.0,
            StationKind::Hub,
            "lane_b",
            LabelPlacement::Left,
            "Create Artifact",
            vec![
                heading("Create Artifact"),
                para(
                    "Push the builder output to a repository. From here on it is a normal \
                     project: diffs, reviews, CI.",
                ),
            ],
        ),
        station(
            "c4",
            "B5: Agentic Cleanup",
            380.0,
            880.0,
            StationKind::Stop,
            "lane_b",
            LabelPlacement::Left,
            "Batch Chores",
            vec![
                heading("Batch Chores"),
                para(
                    "One agent run over the fresh repo: strip builder branding, fix the \
                     README, add favicon and deployment workflow, verify the build.",
                ),
            ],
        ),
        station(
            "b6",
            "B6: Instant Deploy",
            380.0,
            960.0,
            StationKind::Stop,
            "lane_b",
            LabelPlacement::Left,
            "Live URL",
            vec![
                heading("Live URL"),
                para("Pages deployment turns every push into a shareable link."),
                link(
                    "https://dev.to/suckup_de/posts-as-webapps-26lk",
                    "Posts as Webapps",
                    Some("Example webapps created this way."),
                ),
            ],
        ),
    ]
}

fn lane_c_stations() -> Vec<Station> {
    vec![
        station(
            "c1",
            "C1: Hard Rules",
            620.0,
            580.0,
            StationKind::Stop,
            "lane_c",
            LabelPlacement::Right,
            "AGENTS.md",
            vec![
                heading("AGENTS.md"),
                para(
                    "The rulebook the agent reads on every run: stack, style, forbidden \
                     dependencies, required checks. Rules written once beat instructions \
                     repeated forever.",
                ),
            ],
        ),
        station(
            "c2",
            "C2: Generate TODO",
            620.0,
            680.0,
            StationKind::Stop,
            "lane_c",
            LabelPlacement::Right,
            "Atomic Tasks",
            vec![
                heading("Atomic Tasks"),
                para(
                    "Break the plan into docs/TODO.md entries small enough that each produces \
                     one reviewable diff.",
                ),
            ],
        ),
        station(
            "c3",
            "C3: Run Agent",
            620.0,
            780.0,
            StationKind::Stop,
            "lane_c",
            LabelPlacement::Right,
            "Execute List",
            vec![
                heading("Execute List"),
                code_block("codex --yolo \"Implement the open tasks from docs/TODO.md\""),
                para("The agent works the list; the rules file keeps it inside the fence."),
            ],
        ),
        station(
            "c4_real",
            "C4: Diff Review",
            620.0,
            880.0,
            StationKind::Hub,
            "lane_c",
            LabelPlacement::Right,
            "Human Review",
            vec![
                heading("Human Review"),
                para(
                    "Every agent diff gets read like a stranger's pull request. The reviewer \
                     seat is the one seat you cannot delegate.",
                ),
            ],
        ),
        station(
            "c5",
            "C5: Iterate",
            620.0,
            980.0,
            StationKind::Stop,
            "lane_c",
            LabelPlacement::Right,
            "Small Batches",
            vec![
                heading("Small Batches"),
                para(
                    "Short runs, reviewed and merged, then the next batch. Long unattended \
                     runs are where the mental model of the project slips away.",
                ),
            ],
        ),
    ]
}

fn lane_d_stations() -> Vec<Station> {
    vec![
        station(
            "d1",
            "D1: Curate Context",
            850.0,
            580.0,
            StationKind::Stop,
            "lane_d",
            LabelPlacement::Right,
            "Open Tabs",
            vec![
                heading("Open Tabs"),
                para("The assistant sees what you see. Before asking, open:"),
                numbered(&[
                    "The interface or contract.",
                    "The concrete implementation.",
                    "The relevant test.",
                    "Involved DTOs.",
                ]),
                Block::Paragraph(vec![
                    strong("Rule: "),
                    text("If the file is not open, it doesn't exist."),
                ]),
            ],
        ),
        station(
            "d2",
            "D2: Inline Edit",
            850.0,
            680.0,
            StationKind::Stop,
            "lane_d",
            LabelPlacement::Right,
            "Visible Diffs",
            vec![
                heading("Visible Diffs"),
                Block::Paragraph(vec![
                    text("Prefer scoped inline edits ("),
                    Span::Code("Ctrl + Shift + I".into()),
                    text(") over chat. The change stays on screen, small, and reviewable."),
                ]),
            ],
        ),
        station(
            "d3",
            "D3: Explain First",
            850.0,
            780.0,
            StationKind::Stop,
            "lane_d",
            LabelPlacement::Right,
            "Understand",
            vec![
                heading("Reverse Documentation"),
                para(
                    "Ask for an explanation of the code before asking for a change to it. If \
                     the explanation is wrong, the change would have been worse.",
                ),
            ],
        ),
        station(
            "d4",
            "D4: Explainable",
            850.0,
            880.0,
            StationKind::Hub,
            "lane_d",
            LabelPlacement::Right,
            "No Magic",
            vec![
                heading("No Magic"),
                para(
                    "Nothing lands that you cannot explain line by line. Code you cannot \
                     explain is code you cannot debug at 3 a.m.",
                ),
            ],
        ),
        station(
            "d5",
            "D5: Tiny Commits",
            850.0,
            980.0,
            StationKind::Stop,
            "lane_d",
            LabelPlacement::Right,
            "Revertible",
            vec![
                heading("Revertible"),
                para(
                    "Commit in steps small enough to revert without archaeology. Assistant \
                     sessions that end in one giant commit end badly.",
                ),
            ],
        ),
    ]
}

fn exit_stations() -> Vec<Station> {
    vec![
        station(
            "x1",
            "X1: Run Checks",
            500.0,
            1080.0,
            StationKind::Stop,
            "exit",
            LabelPlacement::Left,
            "Validation",
            vec![
                heading("Validation"),
                para(
                    "Build, tests, static analysis. The same gate for every lane, no matter \
                     what produced the change.",
                ),
            ],
        ),
        station(
            "x2",
            "X2: Fix via Rules",
            500.0,
            1160.0,
            StationKind::Stop,
            "exit",
            LabelPlacement::Right,
            "No Guessing",
            vec![
                heading("No Guessing"),
                para(
                    "A failing check means a missing rule or a bad input. Fix the cause and \
                     the class of bug disappears; patch the symptom and it returns.",
                ),
            ],
        ),
        station(
            "x3",
            "X3: Draft Commit",
            500.0,
            1240.0,
            StationKind::Stop,
            "exit",
            LabelPlacement::Left,
            "Auto Summary",
            vec![
                heading("Auto Summary"),
                para("Let the model draft the commit message from the final diff. It is better at summarizing than you are at remembering."),
            ],
        ),
        station(
            "x4",
            "X4: Add the WHY",
            500.0,
            1320.0,
            StationKind::Stop,
            "exit",
            LabelPlacement::Right,
            "Human Intent",
            vec![
                heading("Human Intent"),
                para(
                    "The draft says what changed. You add why: the constraint, the tradeoff, \
                     the rejected alternative. That part cannot be generated.",
                ),
            ],
        ),
        station(
            "x5",
            "X5: Persist",
            500.0,
            1400.0,
            StationKind::Terminus,
            "exit",
            LabelPlacement::Bottom,
            "Repo Memory",
            vec![
                heading("Repo Memory"),
                para(
                    "End of the line: write the session's lessons into the repository. Rules, \
                     docs, TODOs. The next session starts where this one ended.",
                ),
            ],
        ),
    ]
}

fn build_catalog() -> Catalog {
    let mut stations = Vec::new();
    stations.extend(foundation_stations());
    stations.extend(start_stations());
    stations.extend(lane_a_stations());
    stations.extend(lane_b_stations());
    stations.extend(lane_c_stations());
    stations.extend(lane_d_stations());
    stations.extend(exit_stations());
    Catalog {
        lines: build_lines(),
        stations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_is_consistent() {
        assert!(catalog().validate().is_ok());
    }

    #[test]
    fn test_traversal_starts_at_the_mental_model() {
        let first = &catalog().stations[0];
        assert_eq!(first.id, "p1");
        assert_eq!(first.line_id, "foundation");
    }

    #[test]
    fn test_station_and_line_counts() {
        assert_eq!(catalog().lines.len(), 7);
        assert_eq!(catalog().stations.len(), 31);
    }

    #[test]
    fn test_every_line_has_stations() {
        let catalog = catalog();
        for line in &catalog.lines {
            assert!(
                catalog.line_stations(&line.id).next().is_some(),
                "line '{}' has no stations",
                line.id
            );
        }
    }

    #[test]
    fn test_legacy_station_ids_resolve() {
        // published deep links use these ids, including the b5/c4 mismatch
        let catalog = catalog();
        assert_eq!(catalog.station("c4").map(|s| s.line_id.as_str()), Some("lane_b"));
        assert_eq!(
            catalog.station("c4_real").map(|s| s.line_id.as_str()),
            Some("lane_c")
        );
    }

    #[test]
    fn test_terminus_ends_the_traversal() {
        let catalog = catalog();
        let last = catalog.stations.last().unwrap();
        assert_eq!(last.id, "x5");
        assert_eq!(last.kind, StationKind::Terminus);
    }

    #[test]
    fn test_every_line_carries_a_guide() {
        for line in &catalog().lines {
            assert!(line.full_content.is_some(), "line '{}' has no guide", line.id);
        }
    }

    #[test]
    fn test_stations_sit_inside_the_diagram() {
        for station in &catalog().stations {
            assert!((0.0..=DIAGRAM_WIDTH).contains(&station.x), "{}", station.id);
            assert!((0.0..=DIAGRAM_HEIGHT).contains(&station.y), "{}", station.id);
        }
    }
}
