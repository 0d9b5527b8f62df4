//! Print-ready LaTeX export of a proposal record
//!
//! Consumes only already-computed record fields plus the shared formatting
//! helpers in [`crate::format`], so this export and the on-screen view can
//! never disagree on a number.

use super::locale::Localizer;
use crate::format::{
    age_at, age_span, format_money, prepay_summary, rebate_summary, return_rate, year_span,
};
use crate::proposal::{Horizon, ProposalRecord};

/// LaTeX needs the percent sign escaped in text mode
fn escape_percent(s: &str) -> String {
    s.replace('%', "\\%")
}

/// Render the two-page landscape A4 proposal document
pub fn render_document(record: &ProposalRecord, localizer: &Localizer) -> String {
    let mut doc = String::new();

    doc.push_str(PREAMBLE);

    // Page 1: client overview plus scenario A/B tables
    doc.push_str(&format!(
        "\\section*{{客户概览: {name}}}\n\n\
         \\begin{{minipage}}{{0.35\\textwidth}}\n\
         \\textbf{{尊贵的 {name} 阁下}} (年龄: {age})，感谢您选择我们的资产托管服务。\n\n\
         \\vspace{{1em}}\n\
         \\textbf{{保费资讯:}}\n\
         \\begin{{itemize}}\n\
         \\item 计划名称: {plan}\n\
         \\item 总保费: USD {total}\n\
         \\item 缴费方式: {payment}\n\
         \\end{{itemize}}\n\
         \\end{{minipage}}\n\
         \\hfill\n\
         \\begin{{minipage}}{{0.6\\textwidth}}\n",
        name = record.client.name,
        age = record.client.age,
        plan = localizer.localize(&record.plan_name),
        total = format_money(record.premium.total),
        payment = localizer.localize(&record.premium.payment_type),
    ));

    doc.push_str(&scenario_a_table(record));
    doc.push_str("\n\\vspace{1em}\n\n");
    doc.push_str(&scenario_b_table(record));
    doc.push_str("\\end{minipage}\n\n\\newpage\n\n");

    // Page 2: goal ledger plus promotions
    doc.push_str(&scenario_c_table(record, localizer));
    doc.push_str(&promo_block(record));

    doc.push_str(CLOSING);
    doc
}

fn scenario_a_table(record: &ProposalRecord) -> String {
    let mut table = String::from(
        "\\section*{情境 A: 资本积累}\n\
         \\renewcommand{\\arraystretch}{1.3}\n\
         \\begin{tabular}{r|p{2cm}|r|r|r}\n\
         \\hline\n\
         \\rowcolor{pbDark!10} \\textbf{年龄} & \\textbf{年度} & \\textbf{退保(USD)} & \\textbf{身故(USD)} & \\textbf{回报} \\\\\n\
         \\hline\n",
    );

    for horizon in Horizon::ALL {
        let value = record.scenario_a.get(horizon);
        table.push_str(&format!(
            "{} & 第 {} 年 & {} & {} & {} \\\\\n",
            age_at(record.client.age, horizon.years()),
            horizon.years(),
            format_money(value.surrender),
            format_money(value.death),
            escape_percent(&return_rate(value.surrender, record.premium.total)),
        ));
    }

    table.push_str("\\hline\n\\end{tabular}\n");
    table
}

fn scenario_b_table(record: &ProposalRecord) -> String {
    let mut table = format!(
        "\\section*{{情境 B: 被动收入}}\n\
         \\textit{{年提取: USD {} (第 {} 年起)}}\n\n\
         \\vspace{{0.5em}}\n\
         \\begin{{tabular}}{{r|p{{2cm}}|r|r|r}}\n\
         \\hline\n\
         \\rowcolor{{pbDark!10}} \\textbf{{年龄}} & \\textbf{{年度}} & \\textbf{{累计(USD)}} & \\textbf{{剩余(USD)}} & \\textbf{{回报}} \\\\\n\
         \\hline\n",
        format_money(record.scenario_b.annual_withdrawal),
        record.scenario_b.withdrawal_start_year,
    );

    for horizon in Horizon::ALL {
        let value = record.scenario_b.get(horizon);
        table.push_str(&format!(
            "{} & 第 {} 年 & {} & {} & {} \\\\\n",
            age_at(record.client.age, horizon.years()),
            horizon.years(),
            format_money(value.cumulative),
            format_money(value.remaining),
            escape_percent(&return_rate(
                value.cumulative + value.remaining,
                record.premium.total
            )),
        ));
    }

    table.push_str("\\hline\n\\end{tabular}\n");
    table
}

fn scenario_c_table(record: &ProposalRecord, localizer: &Localizer) -> String {
    let mut table = String::from(
        "\\section*{情境 C: 人生目标规划 (富足三代图谱)}\n\n\
         根据阁下不同的人生阶段，我们预设了以下资金提取目标，以配合家族三代的财务需求。\n\n\
         \\begin{table}[H]\n\
         \\centering\n\
         \\renewcommand{\\arraystretch}{1.5}\n\
         \\scriptsize\n\
         \\begin{tabular}{c|l|l|p{6cm}|r|r|r|r}\n\
         \\hline\n\
         \\rowcolor{pbDark!10} \\textbf{岁} & \\textbf{年度} & \\textbf{世代} & \\textbf{用途} & \\textbf{年提取 (USD)} & \\textbf{累计 (USD)} & \\textbf{剩余 (USD)} & \\textbf{总回报率} \\\\\n\
         \\hline\n",
    );

    for goal in &record.scenario_c.goals {
        table.push_str(&format!(
            "{} & {} & {} & {} & {} & {} & {} & {} \\\\\n",
            age_span(record.client.age, goal.policy_year_start, goal.policy_year_end),
            year_span(goal.policy_year_start, goal.policy_year_end),
            goal.generation.as_str(),
            localizer.localize(&goal.purpose),
            format_money(goal.amount),
            format_money(goal.cumulative),
            format_money(goal.remaining_value),
            escape_percent(&return_rate(
                goal.cumulative + goal.remaining_value,
                record.premium.total
            )),
        ));
    }

    table.push_str(
        "\\hline\n\
         \\end{tabular}\n\
         \\caption{人生目标资金规划}\n\
         \\end{table}\n\n\
         \\vfill\n\n",
    );
    table
}

fn promo_block(record: &ProposalRecord) -> String {
    let rebate = escape_percent(&rebate_summary(&record.promo));
    let prepay = escape_percent(&prepay_summary(&record.promo));
    let prepay_note = if record.promo.prepay.enabled && !record.promo.prepay.deadline.is_empty() {
        format!("(注意: 优惠截止至 {})", record.promo.prepay.deadline)
    } else {
        String::new()
    };

    format!(
        "\\section*{{推广优惠}}\n\n\
         \\begin{{description}}\n\
         \\item[回赠优惠:] {rebate}\n\
         \\item[预缴利率:] {prepay} {prepay_note}\n\
         \\end{{description}}\n",
    )
}

const PREAMBLE: &str = r"\documentclass[a4paper,12pt,landscape]{article}
\usepackage{geometry}
\geometry{top=2.0cm, bottom=2.0cm, left=2.0cm, right=2.0cm}
\usepackage{fontspec}
\usepackage{xeCJK}
\usepackage{babel}
\usepackage{array}
\usepackage{booktabs}
\usepackage{xcolor}
\usepackage{colortbl}
\usepackage{graphicx}
\usepackage{float}

% Fonts Configuration
\setmainfont{Noto Sans}
\setCJKmainfont{Noto Sans CJK SC}

% Color Definitions
\definecolor{pbGold}{RGB}{184, 134, 11}
\definecolor{pbDark}{RGB}{33, 44, 60}
\definecolor{pbLight}{RGB}{245, 245, 245}

\title{\bfseries\color{pbDark} 私人财富管理建议书}
\author{PRIVATE WEALTH PROPOSAL}
\date{\today}

\begin{document}

\maketitle
\thispagestyle{empty}

";

const CLOSING: &str = r"
\vspace{2em}
\noindent
\rule{\linewidth}{0.5pt}
\vspace{0.5em}
\scriptsize
\textbf{免责声明:} 本文件仅供参考，不构成任何要约或招揽。所有红利及分红均为非保证。投资涉及风险，阁下应留意美息走势对预缴利率的影响。

\end{document}
";
