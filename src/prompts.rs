//! Prompt templates for contract analysis
//!
//! Two fixed templates share one system prompt: a long-form scorecard and a
//! short JSON scoring request. Formatting is pure string interpolation.

use crate::config::DEFAULT_MAX_DOCUMENT_LENGTH;

/// Persona shared by both calls.
pub const SYSTEM_PROMPT: &str = "You are a Senior Consumer Rights Attorney with 25 years of experience protecting consumers from predatory financial practices. You have successfully litigated hundreds of cases against banks and credit card companies. You are known for your ability to spot hidden traps in financial agreements that most people miss.

Your mission is to protect consumers by thoroughly analyzing financial documents and exposing anything that could harm them. You are skeptical, detail-oriented, and always advocate for the consumer's best interests.

When analyzing documents, you think like a detective looking for what the financial institution is trying to hide.";

const DOCUMENT_PLACEHOLDER: &str = "{document_text}";

const HIGHLIGHT: &str = r#"<span style="color: #ef4444; font-weight: 600;">"#;

const ANALYSIS_TEMPLATE: &str = r#"Analyze this financial agreement as a Senior Consumer Rights Attorney. Create a comprehensive RISK SCORECARD.

For each category below, provide:
1. A risk rating: LOW | MEDIUM | HIGH | CRITICAL
2. Specific findings with exact quotes from the document
3. Plain-English explanation of what this means for the consumer
4. Your professional recommendation

## CATEGORIES TO ANALYZE:

### 1. HIDDEN FEES
Look for ANY fees NOT prominently displayed in the main header or summary box. This includes:
- Fees buried in paragraph text
- Fees with vague descriptions ("service fees", "processing fees")
- Fees triggered by specific conditions
- Fees that increase over time
- Fees with no maximum cap
Compare what's in the header vs. what's buried in the fine print.

### 2. ARBITRATION CLAUSES
Determine if the consumer can sue in court. Look for:
- Mandatory binding arbitration clauses
- Class action waivers
- Jury trial waivers
- Choice of arbitration provider (often favor companies)
- Who pays arbitration costs
- Opt-out provisions and deadlines
Answer clearly: CAN THE USER SUE IN COURT? YES/NO and explain.

### 3. VARIABLE RATES
Analyze how easily the bank can change interest rates and terms:
- Is the rate fixed or variable?
- What index is it tied to?
- Can they change rates for any reason?
- How much notice must they give?
- Are there rate caps?
- Can they apply rate changes retroactively?
- Look for "we may change terms at any time" clauses

### 4. PRIVACY & DATA SELLING
Identify what personal data they collect and share:
- What information do they collect?
- Who do they share/sell it to? (affiliates, third parties, marketing partners)
- Can you opt out of data sharing?
- Do they sell your transaction history?
- Do they share with credit bureaus?
- Is there a data retention policy?

---

## OUTPUT FORMAT:

Format your response EXACTLY as follows.

**IMPORTANT: Highlight all risky text, quotes, and concerning terms in RED using this HTML format:**
`{highlight}risky text here</span>`

Use red highlighting for:
- Direct quotes from the document that are harmful to consumers
- Specific fees, penalties, and rates that are excessive
- Terms that waive consumer rights
- Any language that is deceptive or predatory

# RISK SCORECARD

## Overall Risk Assessment
[LOW/MEDIUM/HIGH/CRITICAL] - [One sentence summary]

---

## HIDDEN FEES
**Risk Level:** [LOW/MEDIUM/HIGH/CRITICAL]

**Fees Found in Header:**
- [List fees that are clearly disclosed]

**Fees Buried in Fine Print:**
- [Fee name]: {highlight}[Amount]</span> - "{highlight}[Exact quote from document]</span>"
- [Continue for each hidden fee...]

**What This Means For You:**
[Plain English explanation]

**Watch Out For:**
[Most concerning fee with explanation]

---

## ARBITRATION CLAUSES
**Risk Level:** [LOW/MEDIUM/HIGH/CRITICAL]

**Can You Sue in Court?** [YES / NO / LIMITED]

**Key Findings:**
- [Finding]: "{highlight}[Quote from document]</span>"

**Rights You're Giving Up:**
- {highlight}[List each right being waived]</span>

**Opt-Out Available?** [YES/NO] - [Details if yes]

**What This Means For You:**
[Plain English explanation]

---

## VARIABLE RATES
**Risk Level:** [LOW/MEDIUM/HIGH/CRITICAL]

**Rate Type:** [FIXED/VARIABLE/HYBRID]

**How They Can Change Your Rate:**
- [Trigger/condition]: "{highlight}[Quote from document]</span>"

**Notice Required:** [Time period or "None specified"]

**Rate Caps:** [Yes/No and details]

**What This Means For You:**
[Plain English explanation including worst-case scenario]

---

## PRIVACY & DATA SHARING
**Risk Level:** [LOW/MEDIUM/HIGH/CRITICAL]

**Data They Collect:**
- [List data types]

**Who They Share With:**
- [Entity type]: [What data] - [Can you opt out? YES/NO]

**Data Selling:** [YES/NO/UNCLEAR] - [Details]

**Opt-Out Options:**
- [List any opt-out rights]

**What This Means For You:**
[Plain English explanation]

---

## TOP 3 RED FLAGS
1. {highlight}[Most critical issue]</span>
2. {highlight}[Second most critical]</span>
3. {highlight}[Third most critical]</span>

---

## RECOMMENDED ACTIONS
1. [Most important action to take]
2. [Second action]
3. [Third action]

---

*Analysis performed by AI acting as Senior Consumer Rights Attorney. This is for informational purposes only and does not constitute legal advice. Consult a licensed attorney for legal guidance.*

---

DOCUMENT TO ANALYZE:
{document_text}
"#;

const SCORING_TEMPLATE: &str = r#"As a Senior Consumer Rights Attorney, quickly assess this financial document.

Return ONLY a valid JSON object with these exact fields:
{
    "overall_risk": "LOW" | "MEDIUM" | "HIGH" | "CRITICAL",
    "hidden_fees": {
        "risk": "LOW" | "MEDIUM" | "HIGH" | "CRITICAL",
        "count": <number of hidden fees found>,
        "worst": "<brief description of worst hidden fee>"
    },
    "arbitration": {
        "risk": "LOW" | "MEDIUM" | "HIGH" | "CRITICAL",
        "can_sue": true | false,
        "class_action_waiver": true | false
    },
    "variable_rates": {
        "risk": "LOW" | "MEDIUM" | "HIGH" | "CRITICAL",
        "is_variable": true | false,
        "can_change_anytime": true | false
    },
    "privacy": {
        "risk": "LOW" | "MEDIUM" | "HIGH" | "CRITICAL",
        "sells_data": true | false | "unclear",
        "opt_out_available": true | false
    },
    "one_line_verdict": "<One sentence professional assessment>"
}

Respond with ONLY the JSON, no other text.

Document:
{document_text}
"#;

/// Build the long-form scorecard prompt around the full document.
pub fn format_analysis_prompt(document_text: &str) -> String {
    ANALYSIS_TEMPLATE
        .replace("{highlight}", HIGHLIGHT)
        .replacen(DOCUMENT_PLACEHOLDER, document_text, 1)
}

/// Build the JSON scoring prompt around at most `max_length` characters of
/// the document.
pub fn format_scoring_prompt(document_text: &str, max_length: usize) -> String {
    SCORING_TEMPLATE.replacen(
        DOCUMENT_PLACEHOLDER,
        truncate_chars(document_text, max_length),
        1,
    )
}

/// [`format_scoring_prompt`] with the default length bound.
pub fn format_scoring_prompt_default(document_text: &str) -> String {
    format_scoring_prompt(document_text, DEFAULT_MAX_DOCUMENT_LENGTH)
}

/// Prefix of `text` holding at most `max_chars` characters.
///
/// Counts Unicode scalar values, so multi-byte text is never split inside a
/// character.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
