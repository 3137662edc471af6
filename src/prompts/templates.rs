//! Prompt templates. Placeholders are written as `{name}`.

pub const SQL_OPTIMIZATION: &str = r#"You are an expert SQL optimizer and data engineer. Analyze the following SQL query and provide optimization suggestions.

SQL Query:
{sql_query}

Please provide:
1. **Performance Analysis**: Identify potential performance bottlenecks
2. **Optimization Suggestions**: Specific improvements with explanations
3. **Optimized Query**: A rewritten version of the query
4. **Index Recommendations**: Suggest indexes that could help
5. **Best Practices**: Any SQL best practices that should be applied

Focus on:
- Query execution plan optimization
- Index usage
- CTE simplification
- Column pruning
- Join optimization
- Subquery optimization

Format your response as:
## Performance Analysis
[Your analysis]

## Optimization Suggestions
[Your suggestions]

## Optimized Query
```sql
[Optimized SQL]
```

## Index Recommendations
[Index suggestions]

## Best Practices
[Best practices applied]
"#;

pub const SQL_EXPLAIN: &str = r#"You are an expert SQL analyst. Explain what the following SQL query does in simple terms.

SQL Query:
{sql_query}

Please provide:
1. **Purpose**: What is this query trying to accomplish?
2. **Logic Flow**: Step-by-step explanation of the query logic
3. **Key Components**: Important parts (joins, filters, aggregations)
4. **Data Sources**: What tables/views are being used
5. **Output**: What kind of data will be returned

Keep the explanation clear and accessible to data engineers.
"#;

pub const DAG_EXPLANATION: &str = r#"You are an expert Airflow DAG analyst. Analyze the following Airflow DAG and provide a comprehensive explanation.

DAG Code:
{dag_code}

Please provide:
1. **DAG Overview**: What is the purpose of this DAG?
2. **Task Dependencies**: How are tasks connected and what's the execution flow?
3. **Schedule**: When does this DAG run?
4. **Retry Configuration**: What happens if tasks fail?
5. **Key Tasks**: What are the main operations being performed?
6. **Data Flow**: How does data move through this pipeline?
7. **Potential Issues**: Any potential problems or improvements?

Focus on:
- Task dependencies and execution order
- Retry and failure handling
- Data processing logic
- Performance considerations
- Monitoring and alerting

Format your response as:
## DAG Overview
[Purpose and high-level description]

## Task Dependencies
[Execution flow and dependencies]

## Schedule
[When the DAG runs]

## Retry Configuration
[Failure handling details]

## Key Tasks
[Main operations and their purposes]

## Data Flow
[How data moves through the pipeline]

## Potential Issues
[Problems or improvements to consider]
"#;

pub const DAG_DEBUG: &str = r#"You are an expert Airflow DAG debugger. Analyze the following DAG for potential issues and provide debugging suggestions.

DAG Code:
{dag_code}

Please identify:
1. **Syntax Issues**: Any Python syntax problems
2. **Airflow Issues**: Incorrect Airflow operator usage
3. **Dependency Issues**: Problems with task dependencies
4. **Performance Issues**: Potential performance bottlenecks
5. **Best Practice Violations**: Airflow best practices not followed
6. **Security Issues**: Any security concerns
7. **Debugging Suggestions**: How to troubleshoot issues

Provide specific fixes and improvements.
"#;

pub const DBT_MODEL_GENERATION: &str = r#"You are an expert dbt model generator. Create a dbt model based on the provided schema.

Schema:
{schema}

Table Name: {table_name}
Model Type: {model_type}

Please generate:
1. **dbt Model SQL**: A complete dbt model SQL file
2. **dbt Model YAML**: The corresponding model configuration YAML
3. **Documentation**: Comments explaining the model logic
4. **Tests**: Suggested dbt tests for data quality

Requirements:
- Follow dbt best practices
- Include proper documentation
- Add appropriate tests
- Use meaningful column names
- Include data type transformations
- Add incremental logic if appropriate

Format your response as:

## dbt Model SQL
```sql
-- models/{model_name}.sql
[Generated SQL]
```

## dbt Model YAML
```yaml
# models/{model_name}.yml
[Generated YAML]
```

## Documentation
[Model documentation and logic explanation]

## Suggested Tests
[Data quality test recommendations]
"#;

pub const DBT_SCHEMA_ANALYSIS: &str = r#"You are an expert dbt schema analyst. Analyze the provided schema and suggest the best dbt model structure.

Schema:
{schema}

Please provide:
1. **Model Type Recommendation**: Should this be a staging, intermediate, or mart model?
2. **Column Transformations**: What transformations should be applied?
3. **Data Types**: What data types should be used?
4. **Naming Conventions**: How should columns be renamed?
5. **Business Logic**: What business rules should be applied?
6. **Dependencies**: What other models might this depend on?

Focus on:
- dbt best practices
- Data quality considerations
- Performance optimization
- Maintainability
- Business value
"#;

pub const SCHEMA_COMPARISON: &str = r#"You are an expert data schema analyst. Compare the expected and actual schemas to identify drift and issues.

Expected Schema:
{expected_schema}

Actual Schema:
{actual_schema}

Please analyze:
1. **Schema Drift**: What differences exist between expected and actual?
2. **Type Changes**: Any data type modifications?
3. **Missing Fields**: Fields present in expected but not in actual?
4. **Extra Fields**: Fields in actual but not in expected?
5. **Nullable Changes**: Changes in nullability constraints?
6. **Impact Assessment**: What impact do these changes have?
7. **Recommendations**: How to handle the drift?

Focus on:
- Data type compatibility
- Field presence/absence
- Constraint changes
- Business impact
- Migration strategies

Format your response as:

## Schema Drift Summary
[High-level summary of differences]

## Detailed Analysis
### Type Changes
[Data type modifications]

### Missing Fields
[Fields in expected but not actual]

### Extra Fields
[Fields in actual but not expected]

### Nullable Changes
[Changes in nullability]

## Impact Assessment
[Business and technical impact]

## Recommendations
[How to handle the drift]
"#;

pub const SCHEMA_VALIDATION: &str = r#"You are an expert data schema validator. Validate the provided schema for potential issues.

Schema:
{schema}

Please check for:
1. **Data Type Issues**: Inappropriate data types or constraints
2. **Naming Issues**: Poor naming conventions
3. **Missing Constraints**: Important constraints that should be added
4. **Performance Issues**: Schema design that could cause performance problems
5. **Security Issues**: Sensitive data handling concerns
6. **Best Practice Violations**: Schema design best practices not followed
7. **Improvement Suggestions**: How to improve the schema

Provide specific recommendations for each issue found.
"#;
