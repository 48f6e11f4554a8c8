//! Bundled sample contract
//!
//! A credit card agreement with the usual traps: penalty APR, binding
//! arbitration, unilateral term changes and broad data sharing. Used by the
//! CLI's `--sample` flag and by tests.

/// Sample credit card agreement.
pub const SAMPLE_DOCUMENT: &str = r#"CREDIT CARD AGREEMENT - TERMS AND CONDITIONS
Premier Rewards Card

========== INTEREST RATES ==========
ANNUAL PERCENTAGE RATE (APR) FOR PURCHASES: 24.99% variable, based on Prime Rate
PENALTY APR: 29.99% variable. This APR may be applied to your account if you make a late payment.
How Long Will the Penalty APR Apply? If your APRs are increased for any reason, the Penalty APR will apply indefinitely.

========== FEES ==========
ANNUAL FEE: $0 for the first year, then $95.

TRANSACTION FEES:
- Balance Transfer: 3% of each transfer (minimum $5)
- Cash Advance: 5% of each advance (minimum $10)
- Foreign Transaction: 3% of each transaction

PENALTY FEES:
- Late Payment: Up to $40
- Returned Payment: Up to $40

========== TERMS AND CONDITIONS ==========

1. ARBITRATION AGREEMENT AND CLASS ACTION WAIVER
PLEASE READ THIS SECTION CAREFULLY. IT AFFECTS YOUR LEGAL RIGHTS.

You and we agree that any dispute, claim or controversy arising from or relating to this Agreement will be resolved by binding arbitration administered by the American Arbitration Association, rather than in court.

YOU ARE WAIVING YOUR RIGHT TO A JURY TRIAL AND YOUR RIGHT TO PARTICIPATE IN A CLASS ACTION. You may not act as a class representative or participate as a member of a class of claimants.

The arbitrator's decision will be final and binding. The arbitration will take place in our headquarters city unless we agree otherwise.

2. CHANGE OF TERMS
We may change the terms of this Agreement, including the APRs, at any time for any reason. Changes to APR, fees, and other terms will be effective immediately for future transactions and may apply to your existing balance with 45 days notice.

3. DEFAULT AND ACCELERATION
You will be in default if you fail to make any minimum payment by the due date, exceed your credit limit, make a payment that is returned, or file for bankruptcy. Upon default, we may declare your entire balance immediately due and payable.

4. CROSS-DEFAULT PROVISION
Default on this account or any other account you have with us or our affiliates may, at our sole discretion, result in default on all your accounts with us.

5. INFORMATION SHARING AND PRIVACY
We collect personal information including your name, address, Social Security number, income, employment information, and transaction history.

We may share your personal information with:
- Our affiliates for marketing purposes
- Third-party service providers
- Other financial institutions for joint marketing
- Credit bureaus
- Third parties who purchase our assets

We may share and sell aggregated and de-identified transaction data with third-party data brokers for marketing analytics and research purposes.

To opt out of affiliate marketing sharing, you must call 1-800-XXX-XXXX within 30 days of account opening. You cannot opt out of information sharing with service providers or credit bureaus.

6. ACCOUNT MONITORING
We may monitor and record your phone calls and electronic communications for quality assurance and may use this data to develop and improve our services and products.

7. AUTOMATIC RENEWAL
This card automatically renews each year unless you provide written notice of cancellation at least 45 days before your renewal date. The annual fee is non-refundable once charged."#;
